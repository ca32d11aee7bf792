//! Demo data seeding for Buddy.
//!
//! This crate writes a fixed set of demonstration records (one caregiver, one
//! patient and, from schema v2 on, the assignment linking them) into the
//! Buddy tables, and reads them back for manual verification.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::default();
//! let store = DynamoStore::connect(&config.region, None).await;
//! let set = SeedSet::demo(SchemaVersion::V2, OffsetDateTime::now_utc())?;
//!
//! Seeder::new(store.clone(), config.table_names()?).seed(&set).await?;
//! let report = Verifier::new(store, config.table_names()?)
//!     .verify(&set.keys())
//!     .await?;
//! println!("{report}");
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod migrate;
pub mod store;

// Re-export the record schema
pub use buddy::models::{
    Assignment, Caregiver, DementiaStage, NotificationPreferences, Patient, PatientSummary,
    TimeOfDay,
};
pub use buddy::tables::{Table, TableNames};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{Credentials, SeedConfig};
    pub use crate::db::{Finding, SeedError, SeedReport, Seeder, Verifier, VerifyReport};
    pub use crate::fixtures::{SchemaVersion, SeedKeys, SeedSet};
    pub use crate::migrate::upgrade;
    pub use crate::store::{DynamoStore, Item, MemoryStore, StoreError, TableStore};
    pub use crate::{Table, TableNames};
    pub use time::OffsetDateTime;
}
