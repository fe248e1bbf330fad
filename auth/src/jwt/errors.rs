use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation collapses every rejection (bad signature, malformed
/// encoding, expiry) into `InvalidToken` so callers cannot tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Token signing key is missing or empty")]
    MissingSigningKey,

    #[error("Token lifetime must be positive and representable")]
    InvalidLifetime,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
