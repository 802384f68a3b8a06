//! Password hashing.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), so the
//! parameters travel with each stored value and can be raised without invalidating old hashes.

use crate::error::PasswordError;
use argon2::password_hash::{
    rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::Argon2;

/// Hashes `password` under a freshly generated salt.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;
    Ok(hash.to_string())
}

/// Checks `password` against a value produced by [`hash_password`].
///
/// # Errors
///
/// Returns [`PasswordError::MalformedHash`] if `stored` is not a PHC string Argon2 can verify.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|_| PasswordError::MalformedHash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(_) => Err(PasswordError::MalformedHash),
    }
}
