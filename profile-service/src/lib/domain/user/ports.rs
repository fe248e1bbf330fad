use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRecord;
use crate::user::errors::StoreError;
use crate::user::errors::UserError;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with a freshly generated identifier.
    ///
    /// # Arguments
    /// * `command` - Raw profile fields and plaintext password
    ///
    /// # Returns
    /// Public profile of the created user
    ///
    /// # Errors
    /// * `Validation` - Birthdate unparseable or password empty; nothing is stored
    /// * `Conflict` - Identifier collided twice in a row
    /// * `Unavailable` - Store or entropy source failed
    async fn register(&self, command: RegisterCommand) -> Result<PublicProfile, UserError>;

    /// Authenticate a user and mint an access token.
    ///
    /// # Arguments
    /// * `command` - Identifier and plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password (indistinguishable)
    /// * `Unavailable` - Store lookup failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError>;

    /// Verify a previously issued access token.
    ///
    /// # Returns
    /// Claims carried by the token
    ///
    /// # Errors
    /// * `InvalidToken` - Token forged, malformed or expired
    fn verify_token(&self, token: &str) -> Result<auth::Claims, UserError>;
}

/// Durable mapping from user identifier to profile and stored credential.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a record by identifier.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError>;

    /// Atomically persist a new record, failing if the identifier is taken.
    ///
    /// # Errors
    /// * `Conflict` - Identifier already exists
    /// * `Unavailable` - Store operation failed
    async fn create(&self, record: UserRecord) -> Result<(), StoreError>;
}

/// Source of new user identifiers.
pub trait IdentifierGenerator: Send + Sync + 'static {
    /// Produce an effectively unique identifier without consulting the store.
    fn new_id(&self) -> UserId;
}
