use std::env;
use std::fmt;

use auth::Authenticator;
use auth::HashAlgorithm;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
    #[serde(default)]
    pub issuer: Option<String>,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_minutes", &self.expiration_minutes)
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub algorithm: HashAlgorithm,
    pub salt_length: usize,
}

impl Config {
    /// Longest accepted `jwt.expiration_minutes`.
    pub const MAX_EXPIRATION_MINUTES: i64 = JwtHandler::MAX_LIFETIME_DAYS * 24 * 60;

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PROFILE__JWT__SECRET, PROFILE__PASSWORD__ALGORITHM, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (60 minute tokens, argon2id, 16 byte salt)
    ///
    /// The result is validated; a missing or empty signing secret is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("jwt.expiration_minutes", 60_i64)?
            .set_default("password.algorithm", "argon2id")?
            .set_default("password.salt_length", PasswordHasher::DEFAULT_SALT_LENGTH as i64)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: PROFILE__JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("PROFILE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set to a non-empty value".to_string(),
            ));
        }
        if self.jwt.expiration_minutes <= 0
            || self.jwt.expiration_minutes > Self::MAX_EXPIRATION_MINUTES
        {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                Self::MAX_EXPIRATION_MINUTES,
                self.jwt.expiration_minutes
            )));
        }
        if self.password.salt_length < PasswordHasher::MIN_SALT_LENGTH {
            return Err(ConfigError::Message(format!(
                "password.salt_length must be at least {}, got {}",
                PasswordHasher::MIN_SALT_LENGTH,
                self.password.salt_length
            )));
        }
        Ok(())
    }

    /// Construct the password hasher and token issuer described by this configuration.
    pub fn build_authenticator(&self) -> Result<Authenticator, ConfigError> {
        self.validate()?;

        let password_hasher =
            PasswordHasher::with_settings(self.password.algorithm, self.password.salt_length)
                .map_err(|e| ConfigError::Message(e.to_string()))?;

        let lifetime = Duration::try_minutes(self.jwt.expiration_minutes).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_minutes out of range: {}",
                self.jwt.expiration_minutes
            ))
        })?;
        let mut jwt_handler = JwtHandler::new(self.jwt.secret.as_bytes(), lifetime)
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        if let Some(issuer) = &self.jwt.issuer {
            jwt_handler = jwt_handler.with_issuer(issuer);
        }

        tracing::info!(
            algorithm = %self.password.algorithm,
            salt_length = self.password.salt_length,
            expiration_minutes = self.jwt.expiration_minutes,
            issuer = ?self.jwt.issuer,
            "Authenticator configured"
        );

        Ok(Authenticator::new(password_hasher, jwt_handler))
    }
}
