//! Password Hashing and Verification
//!
//! Argon2id hashing (memory-hard, recommended by OWASP) with zeroization
//! of the clear text. Each hash uses a fresh random salt, so hashing the
//! same password twice yields two different PHC strings that both verify.
//!
//! Password policy (length rules, user-facing messages) is a feature-crate
//! concern; this module only hashes and verifies.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Plain Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization.
///
/// The wrapped string is securely erased when the value is dropped. The type
/// does not implement `Clone`, and its `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of Unicode code points, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Hash the password using Argon2id with a fresh random salt.
    ///
    /// Returns the hash in PHC string format wrapped in [`HashedPassword`].
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format.
///
/// The PHC string carries the algorithm identifier, version, parameters,
/// salt, and the hash itself, so it is self-describing for verification.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string (e.g., loaded from the database).
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    pub fn verify(&self, password: &PlainPassword) -> bool {
        verify_password(&self.hash, password)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

/// Verify a password against a stored PHC string.
///
/// A wrong password returns `false`, never an error. A stored hash that
/// fails to parse also verifies `false` rather than surfacing a fault.
pub fn verify_password(stored_hash: &str, password: &PlainPassword) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    // Argon2 uses constant-time comparison internally
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = PlainPassword::new("correct horse battery".to_string());
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password));

        let wrong = PlainPassword::new("incorrect horse battery".to_string());
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_fresh_salt_per_hash() {
        let password = PlainPassword::new("same password".to_string());
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_malformed_stored_hash_verifies_false() {
        let password = PlainPassword::new("whatever".to_string());
        assert!(!verify_password("not_a_valid_hash", &password));
        assert!(!verify_password("", &password));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = PlainPassword::new("roundtrip me".to_string());
        let hashed = password.hash().unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_char_count_is_code_points() {
        let password = PlainPassword::new("パスワード".to_string());
        assert_eq!(password.char_count(), 5);
    }

    #[test]
    fn test_debug_redaction() {
        let password = PlainPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
