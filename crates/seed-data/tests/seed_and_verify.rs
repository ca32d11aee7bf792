//! Integration tests for seeding and verifying the demo records.
//!
//! These run the seeder and verifier end to end against the in-memory
//! store, so no AWS credentials or DynamoDB instance are needed.
//!
//! Run with: `cargo nextest run -p seed-data seed_and_verify`

use seed_data::prelude::*;
use seed_data::store::{from_item, key, to_item};
use seed_data::{Assignment, Caregiver, DementiaStage, TimeOfDay};
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-04-10 08:00:00 UTC);

fn tables() -> TableNames {
    TableNames::for_environment("it").unwrap()
}

fn buddy_store() -> MemoryStore {
    MemoryStore::new().with_buddy_tables(&tables())
}

fn demo(schema: SchemaVersion) -> SeedSet {
    SeedSet::demo(schema, NOW).unwrap()
}

#[tokio::test]
async fn caregiver_round_trips_by_username() {
    let store = buddy_store();
    Seeder::new(store.clone(), tables())
        .seed(&demo(SchemaVersion::V2))
        .await
        .unwrap();

    let item = store
        .get_item("BuddyCaregivers-it", key([("username", "caregiver_test")]))
        .await
        .unwrap()
        .expect("caregiver should be stored");
    let caregiver: Caregiver = from_item(item).unwrap();

    assert_eq!(caregiver.display_name, "Caregiver Test");
    assert_eq!(caregiver.created_at, NOW);
}

#[tokio::test]
async fn patient_collections_survive_storage() {
    let store = buddy_store();
    Seeder::new(store.clone(), tables())
        .seed(&demo(SchemaVersion::V2))
        .await
        .unwrap();

    let report = Verifier::new(store, tables())
        .verify(&demo(SchemaVersion::V2).keys())
        .await
        .unwrap();
    let patient = report.patient.found().expect("patient should be found");

    assert_eq!(patient.people.len(), 1);
    assert_eq!(patient.medications.len(), 1);
    let times: Vec<_> = patient.routines.iter().map(|r| r.time_of_day).collect();
    assert_eq!(
        times,
        vec![TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening]
    );
    // Seeding stores the authored version without bumping it
    assert_eq!(patient.version, Some(1));
}

#[tokio::test]
async fn assignment_is_primary() {
    let store = buddy_store();
    Seeder::new(store.clone(), tables())
        .seed(&demo(SchemaVersion::V2))
        .await
        .unwrap();

    let item = store
        .get_item(
            "BuddyAssignments-it",
            key([("caregiverId", "cg-001"), ("patientId", "pt-001")]),
        )
        .await
        .unwrap()
        .expect("assignment should be stored");
    let assignment: Assignment = from_item(item).unwrap();

    assert!(assignment.is_primary);
    assert_eq!(assignment.patient_summary.dementia_stage, DementiaStage::Moderate);
}

#[tokio::test]
async fn verify_full_report() {
    let store = buddy_store();
    let set = demo(SchemaVersion::V2);
    Seeder::new(store.clone(), tables()).seed(&set).await.unwrap();

    let report = Verifier::new(store, tables())
        .verify(&set.keys())
        .await
        .unwrap();
    assert!(report.all_found());

    let text = report.to_string();
    assert!(text.contains("✓ Caregiver found: Caregiver Test"));
    assert!(text.contains("✓ Patient found: John"));
    assert!(text.contains("- Routines: 3"));
    assert!(text.contains("- Version: 1"));
    assert!(text.contains("✓ Assignment found: cg-001 -> pt-001"));
    assert!(text.contains("- Primary: true"));
}

#[tokio::test]
async fn verify_empty_tables_never_errors() {
    for schema in [SchemaVersion::V1, SchemaVersion::V2] {
        let report = Verifier::new(buddy_store(), tables())
            .verify(&demo(schema).keys())
            .await
            .unwrap();

        assert!(!report.caregiver.is_found());
        assert!(!report.patient.is_found());
        assert!(report.assignment.iter().all(|a| !a.is_found()));
        assert!(report.to_string().contains("not found"));
    }
}

#[tokio::test]
async fn reseeding_is_last_write_wins() {
    let store = buddy_store();
    let set = demo(SchemaVersion::V2);
    let seeder = Seeder::new(store.clone(), tables());

    seeder.seed(&set).await.unwrap();
    seeder.seed(&set).await.unwrap();

    assert_eq!(store.items("BuddyCaregivers-it"), vec![to_item(&set.caregiver).unwrap()]);
    assert_eq!(store.items("BuddyPatients-it"), vec![to_item(&set.patient).unwrap()]);
    assert_eq!(
        store.items("BuddyAssignments-it"),
        vec![to_item(set.assignment.as_ref().unwrap()).unwrap()]
    );
}

#[tokio::test]
async fn later_run_overwrites_earlier() {
    let store = buddy_store();
    let seeder = Seeder::new(store.clone(), tables());

    seeder
        .seed(&demo(SchemaVersion::V2).with_password_hash("first"))
        .await
        .unwrap();
    seeder
        .seed(&demo(SchemaVersion::V2).with_password_hash("second"))
        .await
        .unwrap();

    let caregivers = store.items("BuddyCaregivers-it");
    assert_eq!(caregivers.len(), 1);
    assert_eq!(caregivers[0]["passwordHash"], "second");
}

#[tokio::test]
async fn failed_write_leaves_partial_seed() {
    // No assignments table: the third write fails after two succeed
    let store = MemoryStore::new().with_tables(&tables(), &[Table::Caregivers, Table::Patients]);

    let err = Seeder::new(store.clone(), tables())
        .seed(&demo(SchemaVersion::V2))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SeedError::Store(StoreError::TableNotFound(ref t)) if t == "BuddyAssignments-it"
    ));
    assert_eq!(store.len("BuddyCaregivers-it"), 1);
    assert_eq!(store.len("BuddyPatients-it"), 1);
}

#[tokio::test]
async fn v1_patient_embeds_caregiver() {
    let store = buddy_store();
    Seeder::new(store.clone(), tables())
        .seed(&demo(SchemaVersion::V1))
        .await
        .unwrap();

    let patients = store.items("BuddyPatients-it");
    assert_eq!(patients[0]["caregiverId"], "cg-001");
    assert!(patients[0].get("version").is_none());
    assert!(store.is_empty("BuddyAssignments-it"));
}
