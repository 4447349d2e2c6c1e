//! Password Hashing and Verification
//!
//! - Argon2id key derivation over a per-user random salt
//! - Zeroization of clear text passwords
//! - Constant-time digest comparison
//! - Optional application-wide pepper
//!
//! The salt is 16 random bytes stored as 32 hex characters next to the
//! digest, so both columns can be kept as plain text.

use std::fmt;

use argon2::Argon2;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{constant_time_eq, random_hex};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Random salt size in bytes (hex-encoded to twice this length)
pub const SALT_BYTES: usize = 16;

/// Derived digest size in bytes
pub const DIGEST_BYTES: usize = 32;

/// Fixed salt for the decoy derivation performed when a user does not exist
const DECOY_SALT: &str = "00000000000000000000000000000000";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize, actual: usize },
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest or salt is not valid hex
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("secret1".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password for registration
    ///
    /// The only policy is a minimum of [`MIN_PASSWORD_LENGTH`] characters.
    /// The password is not trimmed.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            let mut raw = raw;
            raw.zeroize();
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        Ok(Self(raw))
    }

    /// Wrap a password supplied at login
    ///
    /// No policy is applied: an account created under an older policy must
    /// still be able to sign in.
    pub fn for_verification(raw: String) -> Self {
        Self(raw)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Derive a digest with a freshly generated salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = random_hex(SALT_BYTES);
        let digest = derive(&self.peppered(pepper), &salt)?;

        Ok(HashedPassword {
            hash: hex::encode(digest),
            salt,
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored password digest and the salt it was derived with, both hex
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    salt: String,
}

impl HashedPassword {
    /// Rebuild from stored columns (e.g., from database)
    pub fn from_parts(
        hash: impl Into<String>,
        salt: impl Into<String>,
    ) -> Result<Self, PasswordHashError> {
        let hash = hash.into();
        let salt = salt.into();

        let digest = hex::decode(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        if digest.len() != DIGEST_BYTES || salt.is_empty() {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash, salt })
    }

    /// Hex digest for storage
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Hex salt for storage
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Verify a password against this digest
    ///
    /// Re-derives with the stored salt and compares in constant time.
    /// Derivation failures count as a mismatch.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(expected) = hex::decode(&self.hash) else {
            return false;
        };
        match derive(&password.peppered(pepper), &self.salt) {
            Ok(actual) => constant_time_eq(&actual, &expected),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .field("salt", &self.salt)
            .finish()
    }
}

/// Spend one derivation without a stored hash
///
/// Called when the username does not exist so that the response time of a
/// failed login does not reveal whether the account is registered.
pub fn decoy_verify(password: &ClearTextPassword, pepper: Option<&[u8]>) {
    let _ = derive(&password.peppered(pepper), DECOY_SALT);
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Argon2id (default OWASP parameters: m=19456, t=2, p=1) over the hex
/// salt's bytes
fn derive(password: &[u8], salt_hex: &str) -> Result<[u8; DIGEST_BYTES], PasswordHashError> {
    let mut out = [0u8; DIGEST_BYTES];
    Argon2::default()
        .hash_password_into(password, salt_hex.as_bytes(), &mut out)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
