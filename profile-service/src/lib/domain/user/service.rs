use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::PasswordError;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Birthdate;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRecord;
use crate::user::errors::ProfileError;
use crate::user::errors::StoreError;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialStore;
use crate::user::ports::IdentifierGenerator;

/// Identifier collisions tolerated before registration gives up.
const MAX_CREATE_ATTEMPTS: usize = 2;

/// Well-formed credential no password matches, verified against when the
/// identifier is unknown so both failure paths do the same hashing work.
const DUMMY_CREDENTIAL: &str =
    "00000000000000000000000000000000:0000000000000000000000000000000000000000000000000000000000000000";

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<CS, IG>
where
    CS: CredentialStore,
    IG: IdentifierGenerator,
{
    store: Arc<CS>,
    identifiers: Arc<IG>,
    authenticator: Arc<Authenticator>,
}

impl<CS, IG> AuthService<CS, IG>
where
    CS: CredentialStore,
    IG: IdentifierGenerator,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `identifiers` - Identifier source for new users
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(store: Arc<CS>, identifiers: Arc<IG>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            identifiers,
            authenticator,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        self.authenticator
            .hash_password(password)
            .map_err(|e| match e {
                PasswordError::EntropyUnavailable(reason) => {
                    tracing::error!(error = %reason, "Entropy source unavailable");
                    UserError::Unavailable(reason)
                }
                other => UserError::Internal(format!("Password hashing failed: {}", other)),
            })
    }

    async fn persist(
        &self,
        mut profile: UserProfile,
        password_hash: String,
    ) -> Result<UserProfile, UserError> {
        let mut attempt = 1;
        loop {
            let record = UserRecord {
                profile: profile.clone(),
                password_hash: password_hash.clone(),
            };

            match self.store.create(record).await {
                Ok(()) => return Ok(profile),
                Err(StoreError::Conflict(id)) if attempt < MAX_CREATE_ATTEMPTS => {
                    tracing::warn!(user_id = %id, attempt, "Identifier collision, regenerating");
                    profile.id = self.identifiers.new_id();
                    attempt += 1;
                }
                Err(StoreError::Conflict(id)) => {
                    tracing::warn!(user_id = %id, attempt, "Identifier collision, giving up");
                    return Err(UserError::Conflict(id));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist new user");
                    return Err(e.into());
                }
            }
        }
    }

    fn reject_login(&self, reason: &'static str) -> UserError {
        tracing::warn!(reason, "Login rejected");
        UserError::InvalidCredentials
    }
}

#[async_trait]
impl<CS, IG> AuthServicePort for AuthService<CS, IG>
where
    CS: CredentialStore,
    IG: IdentifierGenerator,
{
    async fn register(&self, command: RegisterCommand) -> Result<PublicProfile, UserError> {
        let birthdate = Birthdate::parse(&command.birthdate)?;
        if command.password.is_empty() {
            return Err(ProfileError::EmptyPassword.into());
        }

        let password_hash = self.hash_password(&command.password)?;

        let profile = UserProfile {
            id: self.identifiers.new_id(),
            first_name: command.first_name,
            second_name: command.second_name,
            birthdate,
            biography: command.biography,
            city: command.city,
        };

        let created = self.persist(profile, password_hash).await?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok(created.into())
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, UserError> {
        let Ok(id) = UserId::new(command.id) else {
            return Err(self.reject_login("blank identifier"));
        };

        let record = self.store.find_by_id(&id).await.map_err(|e| {
            tracing::error!(error = %e, "Credential lookup failed");
            UserError::from(e)
        })?;

        let Some(record) = record else {
            let _ = self
                .authenticator
                .verify_password(&command.password, DUMMY_CREDENTIAL);
            return Err(self.reject_login("credentials did not match"));
        };

        let profile = &record.profile;
        let result = self
            .authenticator
            .authenticate(
                &command.password,
                &record.password_hash,
                profile.id.as_str(),
                &profile.first_name,
                &profile.second_name,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    self.reject_login("credentials did not match")
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(error = %err, "Token generation failed");
                    UserError::Internal(format!("Token generation failed: {}", err))
                }
            })?;

        tracing::info!(user_id = %profile.id, "User logged in");

        Ok(AccessToken {
            value: result.access_token,
        })
    }

    fn verify_token(&self, token: &str) -> Result<auth::Claims, UserError> {
        self.authenticator
            .validate_token(token)
            .map_err(|_| UserError::InvalidToken)
    }
}
