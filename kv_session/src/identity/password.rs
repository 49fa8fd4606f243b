use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use super::errors::IdentityError;

/// Hashes a password with Argon2id and a fresh random salt, producing a PHC
/// string that embeds algorithm, parameters, and salt.
pub fn hash_password(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| IdentityError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored PHC hash string.
///
/// A wrong password is `Ok(false)`; only an unparseable hash is an error,
/// since that means the stored credential is corrupt rather than mismatched.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, IdentityError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| IdentityError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
