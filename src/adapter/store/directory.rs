use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{AccountId, AccountProfile, TransactionError, WalletError};
use crate::port::AccountDirectory;

/// In-memory account directory keyed by id, with an email uniqueness index.
pub struct InMemoryDirectory {
    data: Arc<RwLock<DirectoryData>>,
}

struct DirectoryData {
    profiles: HashMap<AccountId, AccountProfile>,
    email_index: HashMap<String, AccountId>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(DirectoryData {
                profiles: HashMap::new(),
                email_index: HashMap::new(),
            })),
        }
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryDirectory {
    async fn register(&self, profile: AccountProfile) -> Result<(), WalletError> {
        let mut data = self.data.write().await;
        let email = profile.email.to_lowercase();

        if data.email_index.contains_key(&email) {
            return Err(WalletError::Transaction(TransactionError::DuplicateEmail));
        }

        data.email_index.insert(email, profile.id);
        data.profiles.insert(profile.id, profile);
        Ok(())
    }

    async fn find(&self, id: AccountId) -> Result<Option<AccountProfile>, WalletError> {
        let data = self.data.read().await;
        Ok(data.profiles.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountProfile>, WalletError> {
        let data = self.data.read().await;
        Ok(data
            .email_index
            .get(&email.to_lowercase())
            .and_then(|id| data.profiles.get(id))
            .cloned())
    }

    async fn account_ids(&self) -> Result<Vec<AccountId>, WalletError> {
        let data = self.data.read().await;
        let mut ids: Vec<AccountId> = data.profiles.keys().copied().collect();
        // Deterministic walk order for the sweep
        ids.sort();
        Ok(ids)
    }

    async fn count(&self) -> Result<usize, WalletError> {
        let data = self.data.read().await;
        Ok(data.profiles.len())
    }
}
