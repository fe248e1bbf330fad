use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by an access token.
///
/// Registered RFC 7519 fields (`sub`, `iat`, `exp`, `iss`) plus the
/// profile names shown by clients without another lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    pub first_name: String,

    pub second_name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Create claims for a user, valid for `lifetime` from `issued_at`.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `first_name` - Given name
    /// * `second_name` - Family name
    /// * `issued_at` - Issuance instant
    /// * `lifetime` - Validity window
    ///
    /// # Errors
    /// * `InvalidLifetime` - `issued_at + lifetime` is not representable
    pub fn for_user(
        user_id: impl ToString,
        first_name: impl ToString,
        second_name: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at
            .checked_add_signed(lifetime)
            .ok_or(JwtError::InvalidLifetime)?;

        Ok(Self {
            sub: user_id.to_string(),
            first_name: first_name.to_string(),
            second_name: second_name.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            iss: None,
        })
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the instant `exp` is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "Ann", "Lee", issued_at(), Duration::hours(24))
            .unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.first_name, "Ann");
        assert_eq!(claims.second_name, "Lee");
        assert_eq!(claims.iat, issued_at().timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(claims.iss.is_none());
    }

    #[test]
    fn test_with_issuer() {
        let claims = Claims::for_user("user123", "Ann", "Lee", issued_at(), Duration::minutes(5))
            .unwrap()
            .with_issuer("profile-service");

        assert_eq!(claims.iss, Some("profile-service".to_string()));
    }

    #[test]
    fn test_for_user_rejects_unrepresentable_expiry() {
        let result = Claims::for_user("u", "a", "b", DateTime::<Utc>::MAX_UTC, Duration::seconds(1));
        assert_eq!(result, Err(JwtError::InvalidLifetime));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::for_user("u", "a", "b", issued_at(), Duration::seconds(10)).unwrap();
        let exp = claims.exp;

        assert!(!claims.is_expired(exp - 1)); // Not expired
        assert!(claims.is_expired(exp)); // Lifetime fully elapsed
        assert!(claims.is_expired(exp + 1)); // Expired
    }

    #[test]
    fn test_serialized_shape() {
        let claims = Claims::for_user("u1", "Ann", "Lee", issued_at(), Duration::minutes(1)).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "u1");
        assert_eq!(json["first_name"], "Ann");
        assert_eq!(json["second_name"], "Lee");
        assert!(json.get("iss").is_none());
    }
}
