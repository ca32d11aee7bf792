//! Schema migration for seed sets.
//!
//! v1 → v2 moves the caregiver linkage out of the patient record into an
//! assignment, adds caregiver contact and notification settings, and stamps
//! the patient with its first version.

use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use crate::fixtures::{SchemaVersion, SeedSet};
use buddy::models::{Assignment, NotificationPreferences};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Seed set is already at schema {0}")]
    AlreadyCurrent(SchemaVersion),
    #[error("Patient {0} has no caregiver linkage to migrate")]
    MissingCaregiverLink(String),
    #[error("Patient {patient_id} is linked to {linked}, but the seed caregiver is {caregiver}")]
    CaregiverMismatch {
        patient_id: String,
        linked: String,
        caregiver: String,
    },
}

/// Initial value of the patient version counter.
pub const INITIAL_PATIENT_VERSION: u32 = 1;

/// Upgrades a v1 seed set to v2, timestamping new audit fields with `now`.
pub fn upgrade(mut set: SeedSet, now: OffsetDateTime) -> Result<SeedSet, MigrationError> {
    if set.schema != SchemaVersion::V1 {
        return Err(MigrationError::AlreadyCurrent(set.schema));
    }

    let caregiver_id = set
        .patient
        .caregiver_id
        .take()
        .ok_or_else(|| MigrationError::MissingCaregiverLink(set.patient.patient_id.clone()))?;

    if caregiver_id != set.caregiver.caregiver_id {
        return Err(MigrationError::CaregiverMismatch {
            patient_id: set.patient.patient_id,
            linked: caregiver_id,
            caregiver: set.caregiver.caregiver_id,
        });
    }

    set.patient.version = Some(INITIAL_PATIENT_VERSION);
    set.patient.last_modified_at = Some(now);
    set.patient.last_modified_by = Some(caregiver_id.clone());

    let phone = set.patient.safety_profile.caregiver_phone.clone();
    set.caregiver.phone_number.get_or_insert(phone);
    set.caregiver
        .notification_preferences
        .get_or_insert_with(NotificationPreferences::default);

    debug!(
        caregiver_id = %caregiver_id,
        patient_id = %set.patient.patient_id,
        "Moving caregiver linkage into assignment"
    );

    set.assignment = Some(Assignment {
        caregiver_id,
        patient_id: set.patient.patient_id.clone(),
        is_primary: true,
        assigned_at: now,
        patient_summary: set.patient.summary(),
    });
    set.schema = SchemaVersion::V2;

    Ok(set)
}
