use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::IdentifierGenerator;

/// Random (v4) UUID identifiers, hyphenated lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierGenerator for UuidGenerator {
    fn new_id(&self) -> UserId {
        UserId::from(Uuid::new_v4())
    }
}
