use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Built from explicitly constructed components; holds no mutable state, so
/// one instance can be shared across concurrent requests.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for storing and verifying secrets
    /// * `jwt_handler` - Token issuer and validator
    pub fn new(password_hasher: PasswordHasher, jwt_handler: JwtHandler) -> Self {
        Self {
            password_hasher,
            jwt_handler,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Entropy source or hash function failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored credential without issuing a token.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored `salt:digest` credential
    /// * `subject` - User identifier placed in `sub`
    /// * `first_name` - Given name claim
    /// * `second_name` - Family name claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or the stored credential is corrupt
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        first_name: &str,
        second_name: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject, first_name, second_name)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is forged, malformed or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::password::HashAlgorithm;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            PasswordHasher::with_settings(HashAlgorithm::Sha256, 16).unwrap(),
            JwtHandler::new(b"test_secret_key_at_least_32_bytes!", Duration::hours(1)).unwrap(),
        )
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "Ann", "Lee")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
        assert_eq!(decoded.first_name, "Ann");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", "Ann", "Lee");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_stored_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "a:b:c", "user123", "Ann", "Lee");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        assert!(authenticator.verify_password("my_password", &hash));
        assert!(!authenticator.verify_password("other", &hash));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
