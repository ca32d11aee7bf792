//! Store seeding.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::fixtures::SeedSet;
use crate::store::{StoreError, TableStore, to_item};
use buddy::tables::{Table, TableNames};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// One record written by a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRecord {
    pub table: String,
    pub description: String,
}

/// Records written by [`Seeder::seed`], in write order.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub written: Vec<WrittenRecord>,
}

/// Writes seed sets into the Buddy tables.
pub struct Seeder<S> {
    store: S,
    tables: TableNames,
}

impl<S: TableStore> Seeder<S> {
    pub fn new(store: S, tables: TableNames) -> Self {
        Self { store, tables }
    }

    /// Writes caregiver, patient and (v2) assignment, in that order.
    ///
    /// Each write is independent. A failure stops the run and leaves the
    /// earlier writes in place.
    pub async fn seed(&self, set: &SeedSet) -> Result<SeedReport, SeedError> {
        info!("Seeding schema {} into {}", set.schema, self.tables.environment());
        let mut report = SeedReport::default();

        self.put(
            Table::Caregivers,
            &set.caregiver,
            format!("caregiver {}", set.caregiver.username),
            &mut report,
        )
        .await?;

        self.put(
            Table::Patients,
            &set.patient,
            format!(
                "patient {} ({})",
                set.patient.preferred_name, set.patient.patient_id
            ),
            &mut report,
        )
        .await?;

        if let Some(assignment) = &set.assignment {
            self.put(
                Table::Assignments,
                assignment,
                format!(
                    "assignment {} -> {}",
                    assignment.caregiver_id, assignment.patient_id
                ),
                &mut report,
            )
            .await?;
        }

        info!("Seeded {} records", report.written.len());
        Ok(report)
    }

    async fn put<T: Serialize>(
        &self,
        table: Table,
        record: &T,
        description: String,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let name = self.tables.name(table);
        info!("Seeding {name}...");

        self.store.put_item(&name, to_item(record)?).await?;

        info!("  Inserted {description}");
        report.written.push(WrittenRecord {
            table: name,
            description,
        });
        Ok(())
    }
}
