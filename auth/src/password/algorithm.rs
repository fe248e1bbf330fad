use std::fmt;
use std::str::FromStr;

use argon2::Argon2;
use serde::Deserialize;
use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;

/// Digest length produced by every supported algorithm.
pub const DIGEST_LENGTH: usize = 32;

/// Hash function applied to `plaintext ‖ salt`.
///
/// Deserializes through [`FromStr`], so configuration accepts the same
/// case-insensitive names as `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum HashAlgorithm {
    /// Single pass of SHA-256 over the UTF-8 bytes of `plaintext + salt_hex`.
    /// Fast, kept for records written in that format.
    Sha256,

    /// Argon2id with the crate's default cost parameters.
    #[default]
    Argon2id,
}

impl HashAlgorithm {
    /// Compute the digest of `plaintext` keyed by the hex-encoded `salt_hex`.
    ///
    /// `sha256` appends the salt's hex text exactly as given; `argon2id`
    /// uses the decoded salt bytes.
    ///
    /// # Errors
    /// * `HashingFailed` - The salt is not hex or the KDF rejected its inputs
    pub fn digest(&self, plaintext: &[u8], salt_hex: &str) -> Result<Vec<u8>, PasswordError> {
        match self {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(plaintext);
                hasher.update(salt_hex.as_bytes());
                Ok(hasher.finalize().to_vec())
            }
            HashAlgorithm::Argon2id => {
                let salt = hex::decode(salt_hex)
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
                let mut output = vec![0u8; DIGEST_LENGTH];
                Argon2::default()
                    .hash_password_into(plaintext, &salt, &mut output)
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
                Ok(output)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "argon2id" => Ok(HashAlgorithm::Argon2id),
            _ => Err(PasswordError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = PasswordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hashes_salt_hex_text() {
        // sha256("passwordab")
        let digest = HashAlgorithm::Sha256.digest(b"password", "ab").unwrap();
        assert_eq!(
            hex::encode(digest),
            "6d351a1e35e50ad2874aa991a411a2e85dbccf2777ddb5214982f973d8471d9c"
        );
    }

    #[test]
    fn test_sha256_keeps_salt_text_as_given() {
        let lower = HashAlgorithm::Sha256.digest(b"password", "ab").unwrap();
        let upper = HashAlgorithm::Sha256.digest(b"password", "AB").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_argon2id_is_deterministic_for_same_salt() {
        let salt = hex::encode([7u8; 16]);
        let first = HashAlgorithm::Argon2id.digest(b"password", &salt).unwrap();
        let second = HashAlgorithm::Argon2id.digest(b"password", &salt).unwrap();

        assert_eq!(first.len(), DIGEST_LENGTH);
        assert_eq!(first, second);
    }

    #[test]
    fn test_argon2id_rejects_short_or_non_hex_salt() {
        let short = HashAlgorithm::Argon2id.digest(b"password", "01010101");
        assert!(matches!(short, Err(PasswordError::HashingFailed(_))));

        let not_hex = HashAlgorithm::Argon2id.digest(b"password", "zzzzzzzzzzzzzzzz");
        assert!(matches!(not_hex, Err(PasswordError::HashingFailed(_))));
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("Argon2id".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Argon2id);
        assert!(matches!(
            "md5".parse::<HashAlgorithm>(),
            Err(PasswordError::UnknownAlgorithm(_))
        ));
    }

    #[derive(Debug, Deserialize)]
    struct Settings {
        algorithm: HashAlgorithm,
    }

    #[test]
    fn test_deserialize_matches_parse() {
        let upper: Settings = serde_json::from_str(r#"{"algorithm":"SHA256"}"#).unwrap();
        assert_eq!(upper.algorithm, HashAlgorithm::Sha256);

        let lower: Settings = serde_json::from_str(r#"{"algorithm":"argon2id"}"#).unwrap();
        assert_eq!(lower.algorithm, HashAlgorithm::Argon2id);

        assert!(serde_json::from_str::<Settings>(r#"{"algorithm":"md5"}"#).is_err());
    }
}
