//! Writing seed sets to the store and reading them back.
//!
//! The [`Seeder`] performs one unconditional put per record; the
//! [`Verifier`] performs one point read per key and never writes.

mod seeder;
mod verifier;

pub use seeder::{SeedError, SeedReport, Seeder, WrittenRecord};
pub use verifier::{Finding, Verifier, VerifyReport};
