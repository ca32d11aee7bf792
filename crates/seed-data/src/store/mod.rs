//! Table-store abstraction over the managed key-value datastore.
//!
//! [`DynamoStore`] talks to DynamoDB; [`MemoryStore`] keeps tables in process
//! and backs the tests.

mod dynamo;
pub mod item;
mod memory;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// A stored record: attribute names mapped to JSON-shaped values.
pub type Item = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Item for {table} is missing key attribute {attribute}")]
    MissingKeyAttribute { table: String, attribute: String },
    #[error("Key attribute {attribute} in {table} must be a string or number")]
    InvalidKeyAttribute { table: String, attribute: String },
    #[error("Item conversion error: {0}")]
    Conversion(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("DynamoDB error: {0}")]
    Dynamo(String),
}

/// Point reads and unconditional writes against named tables.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Writes `item`, replacing any existing item with the same key.
    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError>;

    /// Reads the item with the given key attributes, if present.
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, StoreError>;
}

/// Serializes a record into a store item.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(item) => Ok(item),
        other => Err(StoreError::Conversion(format!(
            "expected a record, got {other}"
        ))),
    }
}

/// Deserializes a store item into a record.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(item))?)
}

/// Builds a key item from attribute name/value pairs.
pub fn key<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Item {
    attributes
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect()
}
