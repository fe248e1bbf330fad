use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::ProfileError;

/// User profile entity.
///
/// The identity is fixed at registration; the remaining fields belong to the
/// profile owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub first_name: String,
    pub second_name: String,
    pub birthdate: Birthdate,
    pub biography: String,
    pub city: String,
}

/// Persisted unit: a profile together with its stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub profile: UserProfile,
    pub password_hash: String,
}

/// Opaque unique user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier received from a caller or the store.
    ///
    /// # Errors
    /// * `InvalidUserId` - Identifier is empty or blank
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProfileError::InvalidUserId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Birthdate value type
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a birthdate string.
    ///
    /// # Errors
    /// * `InvalidBirthdate` - Input is neither a calendar date nor an RFC 3339 timestamp
    pub fn parse(raw: &str) -> Result<Self, ProfileError> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .map(Birthdate)
            .map_err(|_| ProfileError::InvalidBirthdate(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthdate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Profile as returned to callers; never carries credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicProfile {
    pub id: UserId,
    pub first_name: String,
    pub second_name: String,
    pub birthdate: Birthdate,
    pub biography: String,
    pub city: String,
}

impl From<UserProfile> for PublicProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            second_name: profile.second_name,
            birthdate: profile.birthdate,
            biography: profile.biography,
            city: profile.city,
        }
    }
}

/// Bearer token minted by a successful login
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub value: String,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken").field("value", &"<redacted>").finish()
    }
}

/// Command to register a new user from raw request fields
#[derive(Clone)]
pub struct RegisterCommand {
    pub first_name: String,
    pub second_name: String,
    pub birthdate: String,
    pub biography: String,
    pub city: String,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `first_name` - Given name
    /// * `second_name` - Family name
    /// * `birthdate` - Unparsed birthdate (validated by the service)
    /// * `biography` - Free text, may be empty
    /// * `city` - May be empty
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        birthdate: impl Into<String>,
        biography: impl Into<String>,
        city: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            birthdate: birthdate.into(),
            biography: biography.into(),
            city: city.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("first_name", &self.first_name)
            .field("second_name", &self.second_name)
            .field("birthdate", &self.birthdate)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

/// Command to log in with an identifier and password
#[derive(Clone)]
pub struct LoginCommand {
    pub id: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        let birthdate = Birthdate::parse("1990-05-01").unwrap();
        assert_eq!(birthdate.date(), NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
        assert_eq!(birthdate.to_string(), "1990-05-01");
    }

    #[test]
    fn test_parse_rfc3339_keeps_date() {
        let birthdate = Birthdate::parse("1990-05-01T10:30:00Z").unwrap();
        assert_eq!(birthdate.to_string(), "1990-05-01");
    }

    #[test]
    fn test_parse_invalid_birthdate() {
        // Only ISO forms; space-separated date-times and locale layouts are rejected.
        for raw in [
            "not-a-date",
            "",
            "1990-13-01",
            "1990-02-30",
            "1990-05-01 10:00:00",
            "05/01/1990",
        ] {
            assert!(matches!(
                Birthdate::parse(raw),
                Err(ProfileError::InvalidBirthdate(_))
            ));
        }
    }

    #[test]
    fn test_user_id_rejects_blank() {
        assert!(UserId::new("  ").is_err());
        assert_eq!(UserId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_debug_hides_password() {
        let command = RegisterCommand::new("Ann", "Lee", "1990-05-01", "bio", "Paris", "s3cret");
        assert!(!format!("{:?}", command).contains("s3cret"));

        let login = LoginCommand::new("id", "s3cret");
        assert!(!format!("{:?}", login).contains("s3cret"));

        let token = AccessToken {
            value: "header.payload.signature".to_string(),
        };
        assert!(!format!("{:?}", token).contains("signature"));
    }
}
