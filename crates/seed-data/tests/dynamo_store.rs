//! Integration tests for the DynamoDB-backed store.
//!
//! These tests verify end-to-end functionality including:
//! - Seeding and verifying the demo records through the AWS SDK
//! - Point reads on the composite assignments key
//! - Mapping a missing table to `StoreError::TableNotFound`
//!
//! To run these tests, you need:
//! 1. A DynamoDB endpoint, e.g. DynamoDB Local (`docker run -p 8000:8000 amazon/dynamodb-local`)
//! 2. DYNAMODB_ENDPOINT environment variable set
//! 3. Any AWS credentials in the environment (DynamoDB Local accepts dummy values)
//!
//! Run with: `DYNAMODB_ENDPOINT=http://localhost:8000 cargo nextest run -p seed-data dynamo_store`
//!
//! Note: Each test creates its own tables under a unique environment label
//! and deletes them afterwards.

use std::env;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use seed_data::prelude::*;
use seed_data::store::{key, to_item};
use time::macros::datetime;

const REGION: &str = "us-east-1";
const NOW: OffsetDateTime = datetime!(2026-04-10 08:00:00 UTC);

/// Test fixture: an admin client plus the table names created for one test.
struct TestTables {
    client: Client,
    endpoint: String,
    names: TableNames,
}

/// Get an admin client, skipping tests if DYNAMODB_ENDPOINT is not set.
async fn get_test_client() -> Option<(Client, String)> {
    let endpoint = match env::var("DYNAMODB_ENDPOINT") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DYNAMODB_ENDPOINT not set");
            return None;
        }
    };

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(REGION))
        .endpoint_url(&endpoint)
        .load()
        .await;
    let client = Client::new(&config);

    match client.list_tables().limit(1).send().await {
        Ok(_) => Some((client, endpoint)),
        Err(e) => {
            eprintln!("Skipping test: Failed to reach DynamoDB at {endpoint}: {e}");
            None
        }
    }
}

/// Creates the Buddy tables under a unique environment label.
async fn create_test_tables(test_id: &str) -> Option<TestTables> {
    let (client, endpoint) = get_test_client().await?;
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    let names = TableNames::for_environment(&format!("{test_id}-{nanos}"))
        .expect("valid environment label");

    for table in Table::ALL {
        let schema = table.key_schema();
        let mut definitions = Vec::new();
        let mut keys = Vec::new();
        for (i, attribute) in schema.attributes().into_iter().enumerate() {
            definitions.push(
                AttributeDefinition::builder()
                    .attribute_name(attribute)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .expect("attribute definition"),
            );
            keys.push(
                KeySchemaElement::builder()
                    .attribute_name(attribute)
                    .key_type(if i == 0 { KeyType::Hash } else { KeyType::Range })
                    .build()
                    .expect("key schema element"),
            );
        }

        client
            .create_table()
            .table_name(names.name(table))
            .set_attribute_definitions(Some(definitions))
            .set_key_schema(Some(keys))
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .expect("Failed to create test table");
    }

    Some(TestTables {
        client,
        endpoint,
        names,
    })
}

/// Cleanup helper to remove test tables.
async fn cleanup_test_tables(tables: &TestTables) {
    for table in Table::ALL {
        let _ = tables
            .client
            .delete_table()
            .table_name(tables.names.name(table))
            .send()
            .await;
    }
}

#[tokio::test]
async fn test_seed_and_verify_through_sdk() {
    let Some(tables) = create_test_tables("seed").await else {
        return;
    };

    let store = DynamoStore::connect(REGION, Some(tables.endpoint.as_str())).await;
    let set = SeedSet::demo(SchemaVersion::V2, NOW).unwrap();

    let report = Seeder::new(store.clone(), tables.names.clone())
        .seed(&set)
        .await
        .expect("seed should succeed");
    assert_eq!(report.written.len(), 3);

    let verified = Verifier::new(store.clone(), tables.names.clone())
        .verify(&set.keys())
        .await
        .expect("verify should succeed");
    assert!(verified.all_found());

    let patient = verified.patient.found().unwrap();
    assert_eq!(patient.people.len(), 1);
    assert_eq!(patient.routines.len(), 3);
    assert_eq!(patient.medications.len(), 1);
    assert_eq!(patient.version, Some(1));
    assert_eq!(verified.caregiver.found().unwrap(), &set.caregiver);

    // Composite-key point read returns exactly what was written
    let stored = store
        .get_item(
            &tables.names.name(Table::Assignments),
            key([("caregiverId", "cg-001"), ("patientId", "pt-001")]),
        )
        .await
        .unwrap();
    assert_eq!(stored, Some(to_item(set.assignment.as_ref().unwrap()).unwrap()));

    cleanup_test_tables(&tables).await;
}

#[tokio::test]
async fn test_verify_empty_tables_through_sdk() {
    let Some(tables) = create_test_tables("empty").await else {
        return;
    };

    let store = DynamoStore::connect(REGION, Some(tables.endpoint.as_str())).await;
    let keys = SeedSet::demo(SchemaVersion::V2, NOW)
        .unwrap()
        .keys();

    let report = Verifier::new(store, tables.names.clone())
        .verify(&keys)
        .await
        .expect("missing items are not errors");

    assert!(!report.caregiver.is_found());
    assert!(!report.patient.is_found());
    assert_eq!(report.assignment.map(|a| a.is_found()), Some(false));

    cleanup_test_tables(&tables).await;
}

#[tokio::test]
async fn test_missing_table_maps_to_table_not_found() {
    let Some((client, _)) = get_test_client().await else {
        return;
    };
    let store = DynamoStore::from_client(client);
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    let missing = format!("BuddyMissing-{nanos}");

    let err = store
        .put_item(&missing, key([("username", "nobody")]))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::TableNotFound(ref t) if *t == missing));

    let err = store
        .get_item(&missing, key([("username", "nobody")]))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::TableNotFound(_)));
}
