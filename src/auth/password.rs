// Password hashing and verification service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use std::sync::OnceLock;

use crate::auth::error::AuthError;

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Password service for hashing and verification
///
/// Argon2id with the crate's default cost (19 MiB, 2 passes) and a fresh
/// random salt per hash. Output is a PHC string, so the parameters travel
/// with the hash.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))
    }

    /// Verify a password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash(e.to_string())),
        }
    }

    /// A real hash with the same cost as stored ones, matching no user's password
    ///
    /// Logins for unknown usernames verify against it so they take as long as
    /// a wrong password does.
    pub fn dummy_hash() -> &'static str {
        DUMMY_HASH.get_or_init(|| Self::hash_password("no-such-user").unwrap_or_default())
    }
}
