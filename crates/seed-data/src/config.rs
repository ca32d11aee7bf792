//! Configuration for seeding runs.

use thiserror::Error;
use tracing::warn;

use crate::fixtures::{DEMO_PASSWORD_HASH, SchemaVersion};
use buddy::auth::{self, BcryptError};
use buddy::tables::{TableError, TableNames};

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ENVIRONMENT: &str = "dev";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(
        "Refusing to seed {0} with the built-in demo password; supply one via BUDDY_DEMO_PASSWORD"
    )]
    DemoCredentialsInProduction(String),
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] BcryptError),
}

/// Configuration for a seed or verify run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// AWS region hosting the tables.
    pub region: String,

    /// Environment label used to derive table names.
    pub environment: String,

    /// Schema layout to seed or verify.
    pub schema: SchemaVersion,

    /// Endpoint override, e.g. a local DynamoDB.
    pub endpoint_url: Option<String>,

    /// Password for the demo caregiver. The built-in demo hash is used when unset.
    pub demo_password: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            schema: SchemaVersion::LATEST,
            endpoint_url: None,
            demo_password: None,
        }
    }
}

/// Caregiver login credentials to seed.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub password_hash: String,
    /// True if the password came from configuration rather than the demo default.
    pub supplied: bool,
}

impl SeedConfig {
    pub fn table_names(&self) -> Result<TableNames, ConfigError> {
        Ok(TableNames::for_environment(&self.environment)?)
    }

    pub fn is_production(&self) -> bool {
        matches!(
            self.environment.to_ascii_lowercase().as_str(),
            "prod" | "production"
        )
    }

    /// Resolves the caregiver password hash for this run.
    ///
    /// A supplied password is hashed fresh. Without one the built-in demo
    /// hash is used, which is refused for production environments.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        match &self.demo_password {
            Some(password) => Ok(Credentials {
                password_hash: auth::hash_password(password)?,
                supplied: true,
            }),
            None if self.is_production() => Err(ConfigError::DemoCredentialsInProduction(
                self.environment.clone(),
            )),
            None => {
                warn!("Using built-in demo credentials");
                Ok(Credentials {
                    password_hash: DEMO_PASSWORD_HASH.to_string(),
                    supplied: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.schema, SchemaVersion::V2);
        assert_eq!(
            config.table_names().unwrap().name(buddy::tables::Table::Patients),
            "BuddyPatients-dev"
        );
    }

    #[test]
    fn test_demo_credentials() {
        let creds = SeedConfig::default().credentials().unwrap();

        assert_eq!(creds.password_hash, DEMO_PASSWORD_HASH);
        assert!(!creds.supplied);
    }

    #[test]
    fn test_production_requires_password() {
        let config = SeedConfig {
            environment: "Prod".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            config.credentials(),
            Err(ConfigError::DemoCredentialsInProduction(_))
        ));
    }

    #[test]
    fn test_supplied_password_is_hashed() {
        let config = SeedConfig {
            environment: "prod".to_string(),
            demo_password: Some("correct horse".to_string()),
            ..Default::default()
        };
        let creds = config.credentials().unwrap();

        assert!(creds.supplied);
        assert!(auth::verify_password("correct horse", &creds.password_hash).unwrap());
    }

    #[test]
    fn test_invalid_environment() {
        let config = SeedConfig {
            environment: "not valid".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.table_names(), Err(ConfigError::Table(_))));
    }
}
