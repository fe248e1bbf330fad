use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserRecord;
use crate::domain::user::ports::CredentialStore;
use crate::user::errors::StoreError;

/// Process-local credential store.
///
/// `create` checks and inserts under a single write lock, so concurrent
/// registrations with the same identifier cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn create(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let id = record.profile.id.clone();

        if records.contains_key(&id) {
            return Err(StoreError::Conflict(id.to_string()));
        }

        records.insert(id, record);
        Ok(())
    }
}
