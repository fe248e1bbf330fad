use rand::rngs::OsRng;
use rand::RngCore;

use super::algorithm::HashAlgorithm;
use super::errors::PasswordError;

/// Separator between the hex salt and the hex digest in a stored credential.
pub const DELIMITER: char = ':';

/// Password hashing implementation.
///
/// Produces self-contained `salt:digest` strings (both lowercase hex) so that
/// verification only needs the stored string and the candidate password.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    algorithm: HashAlgorithm,
    salt_length: usize,
}

impl PasswordHasher {
    /// Shortest salt accepted, in bytes.
    pub const MIN_SALT_LENGTH: usize = 8;
    pub const DEFAULT_SALT_LENGTH: usize = 16;

    /// Create a password hasher with Argon2id and a 16 byte salt.
    pub fn new() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            salt_length: Self::DEFAULT_SALT_LENGTH,
        }
    }

    /// Create a password hasher with explicit settings.
    ///
    /// # Arguments
    /// * `algorithm` - Hash function applied to `password ‖ salt`
    /// * `salt_length` - Number of random salt bytes per credential
    ///
    /// # Errors
    /// * `InvalidSaltLength` - Salt shorter than `MIN_SALT_LENGTH`
    pub fn with_settings(
        algorithm: HashAlgorithm,
        salt_length: usize,
    ) -> Result<Self, PasswordError> {
        if salt_length < Self::MIN_SALT_LENGTH {
            return Err(PasswordError::InvalidSaltLength {
                min: Self::MIN_SALT_LENGTH,
                actual: salt_length,
            });
        }

        Ok(Self {
            algorithm,
            salt_length,
        })
    }

    /// Hash a plaintext password with a freshly drawn salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Stored credential in `hex(salt):hex(digest)` form
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The OS random source failed
    /// * `HashingFailed` - The hash function rejected its inputs
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = vec![0u8; self.salt_length];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::EntropyUnavailable(e.to_string()))?;

        let salt_hex = hex::encode(salt);
        let digest = self.algorithm.digest(password.as_bytes(), &salt_hex)?;

        Ok(format!("{}{}{}", salt_hex, DELIMITER, hex::encode(digest)))
    }

    /// Verify a password against a stored credential.
    ///
    /// Malformed credentials (wrong delimiter count, bad hex, salt the
    /// algorithm refuses) never match.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored` - Credential previously produced by [`PasswordHasher::hash`]
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.split(DELIMITER);
        let (salt_hex, digest_hex) = match (parts.next(), parts.next(), parts.next()) {
            (Some(salt), Some(digest), None) => (salt, digest),
            _ => return false,
        };

        if hex::decode(salt_hex).is_err() {
            return false;
        }
        let Ok(expected) = hex::decode(digest_hex) else {
            return false;
        };

        match self.algorithm.digest(password.as_bytes(), salt_hex) {
            Ok(computed) => constant_time_eq(&computed, &expected),
            Err(_) => false,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two byte slices without short-circuiting on the first difference.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
