//! The demo caregiver and patient, in the schema v1 shape.

use time::OffsetDateTime;
use time::macros::date;

use super::{SchemaVersion, SeedSet};
use buddy::models::{
    Caregiver, DementiaStage, Medication, Patient, Person, Routine, RoutineStep, SafetyProfile,
    TimeOfDay,
};

/// Login password for the demo caregiver. Demo tooling only.
pub const DEMO_PASSWORD: &str = "Demo2026!";

/// bcrypt hash of [`DEMO_PASSWORD`].
pub const DEMO_PASSWORD_HASH: &str =
    "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewKyNiAYMyzJ/IiS";

const CAREGIVER_ID: &str = "cg-001";

pub(super) fn authored(now: OffsetDateTime) -> SeedSet {
    SeedSet {
        schema: SchemaVersion::V1,
        caregiver: caregiver(now),
        patient: patient(),
        assignment: None,
    }
}

fn caregiver(now: OffsetDateTime) -> Caregiver {
    Caregiver {
        username: "caregiver_test".to_string(),
        caregiver_id: CAREGIVER_ID.to_string(),
        display_name: "Caregiver Test".to_string(),
        password_hash: DEMO_PASSWORD_HASH.to_string(),
        created_at: now,
        phone_number: None,
        notification_preferences: None,
    }
}

fn step(id: &str, text: &str, context: Option<&str>) -> RoutineStep {
    RoutineStep {
        step_id: id.to_string(),
        text: text.to_string(),
        context: context.map(str::to_string),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn patient() -> Patient {
    Patient {
        patient_id: "pt-001".to_string(),
        caregiver_id: Some(CAREGIVER_ID.to_string()),
        name: "John Doe".to_string(),
        preferred_name: "John".to_string(),
        birthdate: date!(1950 - 03 - 15),
        dementia_stage: DementiaStage::Moderate,
        people: vec![Person {
            person_id: "p-001".to_string(),
            name: "Sarah".to_string(),
            relationship: "daughter".to_string(),
            visit_schedule: "Tuesdays".to_string(),
            shared_activities: strings(&["gardening"]),
            photo_url: None,
        }],
        routines: vec![
            Routine {
                routine_id: "r-001".to_string(),
                time_of_day: TimeOfDay::Morning,
                steps: vec![
                    step(
                        "s-001",
                        "Brush your teeth.",
                        Some("Your toothbrush is in the blue cup by the sink."),
                    ),
                    step("s-002", "Take your medication.", None),
                    step("s-003", "Eat breakfast.", None),
                ],
            },
            Routine {
                routine_id: "r-002".to_string(),
                time_of_day: TimeOfDay::Afternoon,
                steps: vec![
                    step("s-004", "Have lunch.", None),
                    step(
                        "s-005",
                        "Take a short walk.",
                        Some("Walk around the living room or garden."),
                    ),
                ],
            },
            Routine {
                routine_id: "r-003".to_string(),
                time_of_day: TimeOfDay::Evening,
                steps: vec![
                    step("s-006", "Have dinner.", None),
                    step(
                        "s-007",
                        "Watch your favorite show.",
                        Some("The news is on at 6 PM."),
                    ),
                    step(
                        "s-008",
                        "Get ready for bed.",
                        Some("Your pajamas are in the top drawer."),
                    ),
                ],
            },
        ],
        medications: vec![Medication {
            medication_id: "m-001".to_string(),
            name: "Donepezil".to_string(),
            timing: "after breakfast".to_string(),
            appearance: "small white round pill".to_string(),
            notes: "Take with food".to_string(),
        }],
        safety_profile: SafetyProfile {
            caregiver_phone: "+15550123".to_string(),
            emergency_contacts: strings(&["Sarah", "Neighbor Tom"]),
            allergies: strings(&["penicillin"]),
            known_triggers: strings(&["nighttime confusion", "crowds"]),
            medical_conditions: strings(&["Alzheimer's", "hypertension"]),
        },
        version: None,
        last_modified_at: None,
        last_modified_by: None,
    }
}
