//! Shared schema for the Buddy caregiver assistant.
//!
//! Record types here define the item shapes stored in the caregivers,
//! patients and assignments tables. The conversational skill, the caregiver
//! dashboard and the seeding tools all read and write these shapes.

pub mod auth;
pub mod models;
pub mod tables;
