//! Credential primitives library
//!
//! Provides the security-critical pieces of account authentication:
//! - Salted password hashing (`salt:digest`, Argon2id or SHA-256)
//! - JWT access token issuance and validation
//! - Authentication coordination
//!
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let stored = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &stored));
//! assert!(!hasher.verify("other", &stored));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//! let token = handler.issue("user123", "Ann", "Lee").unwrap();
//! let claims = handler.validate(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, JwtHandler, PasswordHasher};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::new(),
//!     JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap(),
//! );
//!
//! // Register: hash password
//! let stored = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth
//!     .authenticate("password123", &stored, "user123", "Ann", "Lee")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.first_name, "Ann");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashAlgorithm;
pub use password::PasswordError;
pub use password::PasswordHasher;
