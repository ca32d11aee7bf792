use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::{Item, StoreError, TableStore};
use buddy::tables::{KeySchema, Table, TableNames};

struct MemoryTable {
    key: KeySchema,
    items: BTreeMap<String, Item>,
}

/// In-process table store.
///
/// Tables must be declared up front with their key schema. Writes to an
/// undeclared table fail with [`StoreError::TableNotFound`], as DynamoDB does
/// for a missing table. Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<String, MemoryTable>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an empty table.
    pub fn with_table(self, name: impl Into<String>, key: KeySchema) -> Self {
        self.lock().insert(
            name.into(),
            MemoryTable {
                key,
                items: BTreeMap::new(),
            },
        );
        self
    }

    /// Declares the given Buddy tables for an environment.
    pub fn with_tables(self, names: &TableNames, tables: &[Table]) -> Self {
        tables.iter().fold(self, |store, table| {
            store.with_table(names.name(*table), table.key_schema())
        })
    }

    /// Declares every Buddy table for an environment.
    pub fn with_buddy_tables(self, names: &TableNames) -> Self {
        self.with_tables(names, &Table::ALL)
    }

    /// Number of items in `table`, or 0 if it is not declared.
    pub fn len(&self, table: &str) -> usize {
        self.lock().get(table).map_or(0, |t| t.items.len())
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    /// Snapshot of every item in `table`, ordered by key.
    pub fn items(&self, table: &str) -> Vec<Item> {
        self.lock()
            .get(table)
            .map(|t| t.items.values().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, MemoryTable>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Canonical string form of an item's primary key.
fn key_of(table: &str, schema: &KeySchema, item: &Item) -> Result<String, StoreError> {
    let mut parts = Vec::new();
    for attribute in schema.attributes() {
        match item.get(attribute) {
            Some(value @ (Value::String(_) | Value::Number(_))) => parts.push(value.clone()),
            Some(_) => {
                return Err(StoreError::InvalidKeyAttribute {
                    table: table.to_string(),
                    attribute: attribute.to_string(),
                });
            }
            None => {
                return Err(StoreError::MissingKeyAttribute {
                    table: table.to_string(),
                    attribute: attribute.to_string(),
                });
            }
        }
    }
    Ok(Value::Array(parts).to_string())
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), StoreError> {
        let mut tables = self.lock();
        let entry = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = key_of(table, &entry.key, &item)?;
        entry.items.insert(key, item);
        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, StoreError> {
        let tables = self.lock();
        let entry = tables
            .get(table)
            .ok_or_else(|| StoreError::TableNotFound(table.to_string()))?;
        let key = key_of(table, &entry.key, &key)?;
        Ok(entry.items.get(&key).cloned())
    }
}
