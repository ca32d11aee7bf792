//! Example: Print the demo records exactly as they would be stored.
//!
//! Useful for diffing against what the backend expects without touching
//! DynamoDB.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --example dump_items
//! cargo run -p seed-data --example dump_items -- v1
//! ```

use seed_data::prelude::*;
use seed_data::store::to_item;

fn main() -> anyhow::Result<()> {
    let schema = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => SchemaVersion::LATEST,
    };
    let set = SeedSet::demo(schema, OffsetDateTime::now_utc())?;
    let tables = TableNames::for_environment("dev")?;

    let mut items = vec![
        (Table::Caregivers, to_item(&set.caregiver)?),
        (Table::Patients, to_item(&set.patient)?),
    ];
    if let Some(assignment) = &set.assignment {
        items.push((Table::Assignments, to_item(assignment)?));
    }

    for (table, item) in items {
        println!("# {}", tables.name(table));
        println!("{}", serde_json::to_string_pretty(&item)?);
    }

    Ok(())
}
