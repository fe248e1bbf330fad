pub mod algorithm;
pub mod errors;
pub mod salted;

pub use algorithm::HashAlgorithm;
pub use errors::PasswordError;
pub use salted::PasswordHasher;
