use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caregiver {
    pub username: String,
    pub caregiver_id: String,
    pub display_name: String,
    pub password_hash: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<NotificationPreferences>,
}

/// Per-caregiver alert delivery settings, including a daily quiet-hours window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub sms_enabled: bool,
    pub level1_alerts: bool,
    pub level2_alerts: bool,
    #[serde(with = "clock_time")]
    pub quiet_hours_start: Time,
    #[serde(with = "clock_time")]
    pub quiet_hours_end: Time,
}

impl NotificationPreferences {
    /// Returns true if `at` falls inside the quiet-hours window.
    ///
    /// The window is half-open (`start <= at < end`) and may wrap midnight.
    /// An empty window (start == end) never matches.
    pub fn in_quiet_hours(&self, at: Time) -> bool {
        let (start, end) = (self.quiet_hours_start, self.quiet_hours_end);
        if start <= end {
            start <= at && at < end
        } else {
            at >= start || at < end
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            sms_enabled: true,
            level1_alerts: true,
            level2_alerts: true,
            quiet_hours_start: time::macros::time!(22:00),
            quiet_hours_end: time::macros::time!(07:00),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DementiaStage {
    Mild,
    Moderate,
    Severe,
}

impl DementiaStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DementiaStage::Mild => "mild",
            DementiaStage::Moderate => "moderate",
            DementiaStage::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub patient_id: String,
    /// Owning caregiver. Only present in schema v1 records; v2 moves the
    /// linkage into the assignments table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caregiver_id: Option<String>,
    pub name: String,
    pub preferred_name: String,
    #[serde(with = "calendar_date")]
    pub birthdate: Date,
    pub dementia_stage: DementiaStage,
    pub people: Vec<Person>,
    pub routines: Vec<Routine>,
    pub medications: Vec<Medication>,
    pub safety_profile: SafetyProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
}

impl Patient {
    /// Snapshot of the fields denormalised onto assignments.
    pub fn summary(&self) -> PatientSummary {
        PatientSummary {
            name: self.name.clone(),
            preferred_name: self.preferred_name.clone(),
            dementia_stage: self.dementia_stage,
        }
    }

    pub fn routine(&self, time_of_day: TimeOfDay) -> Option<&Routine> {
        self.routines.iter().find(|r| r.time_of_day == time_of_day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub person_id: String,
    pub name: String,
    pub relationship: String,
    pub visit_schedule: String,
    pub shared_activities: Vec<String>,
    // Stored as an explicit null when absent.
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub routine_id: String,
    pub time_of_day: TimeOfDay,
    pub steps: Vec<RoutineStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub step_id: String,
    pub text: String,
    /// Hint read out when the patient asks for more detail.
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub medication_id: String,
    pub name: String,
    pub timing: String,
    pub appearance: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyProfile {
    pub caregiver_phone: String,
    pub emergency_contacts: Vec<String>,
    pub allergies: Vec<String>,
    pub known_triggers: Vec<String>,
    pub medical_conditions: Vec<String>,
}

/// Caregiver-to-patient link, keyed by (caregiver_id, patient_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub caregiver_id: String,
    pub patient_id: String,
    pub is_primary: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub assigned_at: OffsetDateTime,
    pub patient_summary: PatientSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub name: String,
    pub preferred_name: String,
    pub dementia_stage: DementiaStage,
}
