use std::sync::Arc;

use auth::Authenticator;
use auth::HashAlgorithm;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use profile_service::domain::user::service::AuthService;
use profile_service::outbound::identifiers::UuidGenerator;
use profile_service::repositories::InMemoryCredentialStore;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application wiring the service to an in-memory store
pub struct TestApp {
    pub service: AuthService<InMemoryCredentialStore, UuidGenerator>,
    pub store: Arc<InMemoryCredentialStore>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Build the application with the given hash algorithm
    pub fn spawn_with(algorithm: HashAlgorithm) -> Self {
        let store = Arc::new(InMemoryCredentialStore::new());
        let authenticator = Arc::new(Authenticator::new(
            PasswordHasher::with_settings(algorithm, PasswordHasher::DEFAULT_SALT_LENGTH)
                .expect("Failed to create password hasher"),
            JwtHandler::new(JWT_SECRET, Duration::hours(24)).expect("Failed to create JWT handler"),
        ));

        let service = AuthService::new(
            Arc::clone(&store),
            Arc::new(UuidGenerator::new()),
            Arc::clone(&authenticator),
        );

        Self {
            service,
            store,
            authenticator,
        }
    }

    /// Build the application with the fast SHA-256 hasher
    pub fn spawn() -> Self {
        Self::spawn_with(HashAlgorithm::Sha256)
    }
}
