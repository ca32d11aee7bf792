//! Hand-authored demonstration records.
//!
//! Records are authored once in the schema v1 shape (see [`demo`]) and
//! brought up to the requested schema through [`crate::migrate::upgrade`].

mod demo;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::OffsetDateTime;

use crate::migrate::{self, MigrationError};
use buddy::models::{Assignment, Caregiver, Patient};

pub use demo::{DEMO_PASSWORD, DEMO_PASSWORD_HASH};

/// Layout of the seeded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Two tables; the patient record embeds its caregiver id.
    V1,
    /// Adds the assignments table, notification preferences and patient
    /// audit fields.
    V2,
}

impl SchemaVersion {
    pub const LATEST: SchemaVersion = SchemaVersion::V2;
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => f.write_str("v1"),
            SchemaVersion::V2 => f.write_str("v2"),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown schema version {0:?} (expected v1 or v2)")]
pub struct ParseSchemaError(String);

impl FromStr for SchemaVersion {
    type Err = ParseSchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(SchemaVersion::V1),
            "v2" | "2" => Ok(SchemaVersion::V2),
            _ => Err(ParseSchemaError(s.to_string())),
        }
    }
}

/// The complete set of records written by one seed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedSet {
    pub schema: SchemaVersion,
    pub caregiver: Caregiver,
    pub patient: Patient,
    pub assignment: Option<Assignment>,
}

impl SeedSet {
    /// Builds the demo records for `schema`, timestamped at `now`.
    pub fn demo(schema: SchemaVersion, now: OffsetDateTime) -> Result<Self, MigrationError> {
        let set = demo::authored(now);
        match schema {
            SchemaVersion::V1 => Ok(set),
            SchemaVersion::V2 => migrate::upgrade(set, now),
        }
    }

    /// Replaces the caregiver's password hash.
    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.caregiver.password_hash = password_hash.into();
        self
    }

    /// Identifying keys for every record in the set.
    pub fn keys(&self) -> SeedKeys {
        SeedKeys {
            username: self.caregiver.username.clone(),
            patient_id: self.patient.patient_id.clone(),
            assignment: self.assignment.as_ref().map(|a| AssignmentKey {
                caregiver_id: a.caregiver_id.clone(),
                patient_id: a.patient_id.clone(),
            }),
        }
    }
}

/// Primary keys of a seed set, used for point reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedKeys {
    pub username: String,
    pub patient_id: String,
    pub assignment: Option<AssignmentKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentKey {
    pub caregiver_id: String,
    pub patient_id: String,
}
