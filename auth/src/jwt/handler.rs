use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// JWT token handler issuing and validating access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Expiry is checked against the injected
/// [`Clock`] rather than by `jsonwebtoken`, without leeway.
#[derive(Clone)]
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
    issuer: Option<String>,
    clock: Arc<dyn Clock>,
}

impl JwtHandler {
    /// Longest token lifetime accepted, in days.
    pub const MAX_LIFETIME_DAYS: i64 = 366;

    /// Create a new JWT handler with a secret key and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `lifetime` - How long issued tokens stay valid
    ///
    /// # Errors
    /// * `MissingSigningKey` - Secret is empty
    /// * `InvalidLifetime` - Lifetime is zero, negative or above `MAX_LIFETIME_DAYS`
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], lifetime: Duration) -> Result<Self, JwtError> {
        Self::with_clock(secret, lifetime, Arc::new(SystemClock))
    }

    /// Same as [`JwtHandler::new`] with an explicit time source.
    pub fn with_clock(
        secret: &[u8],
        lifetime: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSigningKey);
        }
        if lifetime <= Duration::zero() || lifetime > Duration::days(Self::MAX_LIFETIME_DAYS) {
            return Err(JwtError::InvalidLifetime);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
            issuer: None,
            clock,
        })
    }

    /// Stamp issued tokens with `iss` and require it on validation.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }

    /// Issue a signed token for a user.
    ///
    /// # Arguments
    /// * `subject` - User identifier
    /// * `first_name` - Given name
    /// * `second_name` - Family name
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `InvalidLifetime` - Expiry falls outside the representable range
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        first_name: &str,
        second_name: &str,
    ) -> Result<String, JwtError> {
        let mut claims = Claims::for_user(
            subject,
            first_name,
            second_name,
            self.clock.now(),
            self.lifetime,
        )?;
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer);
        }

        self.encode(&claims)
    }

    /// Sign an already built claims set.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claims.
    ///
    /// Checks the signature, then expiry, then the issuer when one is
    /// configured.
    ///
    /// # Errors
    /// * `InvalidToken` - Any of the checks failed
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is enforced below against our own clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected during decoding");
                JwtError::InvalidToken
            })?
            .claims;

        if claims.is_expired(self.clock.now().timestamp()) {
            tracing::debug!(sub = %claims.sub, exp = claims.exp, "Token rejected as expired");
            return Err(JwtError::InvalidToken);
        }

        if self.issuer.is_some() && claims.iss != self.issuer {
            tracing::debug!(sub = %claims.sub, "Token rejected for issuer mismatch");
            return Err(JwtError::InvalidToken);
        }

        Ok(claims)
    }
}
