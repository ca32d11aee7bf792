//! Seeds the Buddy tables with demo data, or verifies a previous seed.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! cargo run -p seed-data --bin seed -- --verify
//! ```

use anyhow::Context;
use clap::Parser;
use seed_data::config::{DEFAULT_ENVIRONMENT, DEFAULT_REGION, SeedConfig};
use seed_data::db::{Seeder, Verifier};
use seed_data::fixtures::{DEMO_PASSWORD, SchemaVersion, SeedSet};
use seed_data::store::DynamoStore;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seed",
    about = "Buddy demo data seeder",
    long_about = "Insert the demo caregiver, patient and assignment into DynamoDB, or read them back with --verify"
)]
struct SeedArgs {
    /// Read the seeded records back and print a summary instead of seeding
    #[arg(long)]
    verify: bool,

    /// AWS region hosting the tables
    #[arg(long, env = "BUDDY_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Environment label used in table names
    #[arg(long, env = "BUDDY_ENVIRONMENT", default_value = DEFAULT_ENVIRONMENT)]
    environment: String,

    /// Table layout to seed (v1 or v2)
    #[arg(long, env = "BUDDY_SCHEMA", default_value_t = SchemaVersion::LATEST)]
    schema: SchemaVersion,

    /// DynamoDB endpoint override, e.g. http://localhost:8000
    #[arg(long, env = "DYNAMODB_ENDPOINT")]
    endpoint_url: Option<String>,

    /// Password for the demo caregiver (defaults to the built-in demo password)
    #[arg(long, env = "BUDDY_DEMO_PASSWORD", hide_env_values = true)]
    demo_password: Option<String>,
}

impl From<SeedArgs> for SeedConfig {
    fn from(args: SeedArgs) -> Self {
        Self {
            region: args.region,
            environment: args.environment,
            schema: args.schema,
            endpoint_url: args.endpoint_url,
            demo_password: args.demo_password,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SeedArgs::parse();
    let verify = args.verify;
    let config = SeedConfig::from(args);
    let tables = config.table_names()?;

    let store = DynamoStore::connect(&config.region, config.endpoint_url.as_deref()).await;
    tracing::info!("Using region {} ({})", config.region, tables.environment());

    let set = SeedSet::demo(config.schema, OffsetDateTime::now_utc())?;

    if verify {
        let report = Verifier::new(store, tables)
            .verify(&set.keys())
            .await
            .context("verification failed")?;
        println!("{report}");
        return Ok(());
    }

    let credentials = config.credentials()?;
    let set = set.with_password_hash(credentials.password_hash);

    Seeder::new(store, tables)
        .seed(&set)
        .await
        .context("seeding failed")?;

    println!("\n✅ Seed data inserted successfully!");
    println!("\nTest Credentials:");
    println!("  Username: {}", set.caregiver.username);
    if credentials.supplied {
        println!("  Password: (as supplied)");
    } else {
        println!("  Password: {DEMO_PASSWORD}");
    }
    println!("  Patient: {}", set.patient.preferred_name);

    Ok(())
}
