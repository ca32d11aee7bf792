//! Read-only verification of seeded records.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::SeedError;
use crate::fixtures::SeedKeys;
use crate::store::{Item, TableStore, from_item, key};
use buddy::models::{Assignment, Caregiver, Patient};
use buddy::tables::{Table, TableNames};

/// Outcome of one point read.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding<T> {
    Found(T),
    NotFound,
}

impl<T> Finding<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            Finding::Found(record) => Some(record),
            Finding::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Finding::Found(_))
    }
}

/// Result of reading back every key of a seed set.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub keys: SeedKeys,
    pub caregiver: Finding<Caregiver>,
    pub patient: Finding<Patient>,
    /// `None` when the keys carry no assignment (schema v1).
    pub assignment: Option<Finding<Assignment>>,
}

impl VerifyReport {
    /// True if every requested record was found.
    pub fn all_found(&self) -> bool {
        self.caregiver.is_found()
            && self.patient.is_found()
            && self.assignment.as_ref().is_none_or(Finding::is_found)
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verifying data...")?;

        match &self.caregiver {
            Finding::Found(caregiver) => {
                writeln!(f, "  ✓ Caregiver found: {}", caregiver.display_name)?
            }
            Finding::NotFound => {
                writeln!(f, "  ✗ Caregiver not found: {}", self.keys.username)?
            }
        }

        match &self.patient {
            Finding::Found(patient) => {
                writeln!(f, "  ✓ Patient found: {}", patient.preferred_name)?;
                writeln!(f, "    - People: {}", patient.people.len())?;
                writeln!(f, "    - Routines: {}", patient.routines.len())?;
                writeln!(f, "    - Medications: {}", patient.medications.len())?;
                if let Some(version) = patient.version {
                    writeln!(f, "    - Version: {version}")?;
                }
            }
            Finding::NotFound => writeln!(f, "  ✗ Patient not found: {}", self.keys.patient_id)?,
        }

        if let (Some(finding), Some(key)) = (&self.assignment, &self.keys.assignment) {
            match finding {
                Finding::Found(assignment) => {
                    writeln!(
                        f,
                        "  ✓ Assignment found: {} -> {}",
                        assignment.caregiver_id, assignment.patient_id
                    )?;
                    writeln!(f, "    - Primary: {}", assignment.is_primary)?;
                    writeln!(
                        f,
                        "    - Patient: {} ({})",
                        assignment.patient_summary.preferred_name,
                        assignment.patient_summary.dementia_stage.as_str()
                    )?;
                }
                Finding::NotFound => writeln!(
                    f,
                    "  ✗ Assignment not found: {} -> {}",
                    key.caregiver_id, key.patient_id
                )?,
            }
        }

        Ok(())
    }
}

/// Reads seeded records back by key.
pub struct Verifier<S> {
    store: S,
    tables: TableNames,
}

impl<S: TableStore> Verifier<S> {
    pub fn new(store: S, tables: TableNames) -> Self {
        Self { store, tables }
    }

    /// Point-reads every key. Missing items are reported, not raised.
    pub async fn verify(&self, keys: &SeedKeys) -> Result<VerifyReport, SeedError> {
        let caregiver = self
            .fetch(Table::Caregivers, key([("username", keys.username.as_str())]))
            .await?;
        let patient = self
            .fetch(Table::Patients, key([("patientId", keys.patient_id.as_str())]))
            .await?;

        let assignment = match &keys.assignment {
            Some(k) => Some(
                self.fetch(
                    Table::Assignments,
                    key([
                        ("caregiverId", k.caregiver_id.as_str()),
                        ("patientId", k.patient_id.as_str()),
                    ]),
                )
                .await?,
            ),
            None => None,
        };

        Ok(VerifyReport {
            keys: keys.clone(),
            caregiver,
            patient,
            assignment,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        table: Table,
        key: Item,
    ) -> Result<Finding<T>, SeedError> {
        let name = self.tables.name(table);
        debug!(table = %name, "Reading item");

        match self.store.get_item(&name, key).await? {
            Some(item) => Ok(Finding::Found(from_item(item)?)),
            None => Ok(Finding::NotFound),
        }
    }
}
