//! Table naming and key schemas shared by every service that touches the store.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid environment label: {0:?}")]
    InvalidEnvironment(String),
}

/// Attribute names forming a table's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySchema {
    pub partition: &'static str,
    pub sort: Option<&'static str>,
}

impl KeySchema {
    pub const fn partition(name: &'static str) -> Self {
        Self {
            partition: name,
            sort: None,
        }
    }

    pub const fn composite(partition: &'static str, sort: &'static str) -> Self {
        Self {
            partition,
            sort: Some(sort),
        }
    }

    /// All key attribute names, partition key first.
    pub fn attributes(&self) -> Vec<&'static str> {
        std::iter::once(self.partition).chain(self.sort).collect()
    }
}

/// The logical tables making up the Buddy datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Caregivers,
    Patients,
    Assignments,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Caregivers, Table::Patients, Table::Assignments];

    fn prefix(&self) -> &'static str {
        match self {
            Table::Caregivers => "BuddyCaregivers",
            Table::Patients => "BuddyPatients",
            Table::Assignments => "BuddyAssignments",
        }
    }

    pub fn key_schema(&self) -> KeySchema {
        match self {
            Table::Caregivers => KeySchema::partition("username"),
            Table::Patients => KeySchema::partition("patientId"),
            Table::Assignments => KeySchema::composite("caregiverId", "patientId"),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Concrete table names for one deployment environment (`dev`, `staging`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    environment: String,
}

impl TableNames {
    pub fn for_environment(environment: &str) -> Result<Self, TableError> {
        let valid = !environment.is_empty()
            && environment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TableError::InvalidEnvironment(environment.to_string()));
        }
        Ok(Self {
            environment: environment.to_string(),
        })
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn name(&self, table: Table) -> String {
        format!("{}-{}", table.prefix(), self.environment)
    }
}
