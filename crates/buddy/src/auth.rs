//! Caregiver password hashing.
//!
//! Hashes use bcrypt so they verify against the login handler in the
//! caregiver dashboard backend.

pub use bcrypt::BcryptError;

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}
