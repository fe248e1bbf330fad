use thiserror::Error;

/// Error for profile field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(String),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),
}

/// Error reported by a credential store adapter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User already exists: {0}")]
    Conflict(String),

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for registration, login and token verification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    // Input validation errors (automatically converted via #[from])
    #[error("Validation failed: {0}")]
    Validation(#[from] ProfileError),

    // Domain-level errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("User already exists: {0}")]
    Conflict(String),

    // Infrastructure errors
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(id) => UserError::Conflict(id),
            StoreError::Unavailable(reason) => UserError::Unavailable(reason),
        }
    }
}
