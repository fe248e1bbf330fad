use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid salt length: minimum {min} bytes, got {actual}")]
    InvalidSaltLength { min: usize, actual: usize },

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}
