use crate::domain::{AccountId, AccountProfile, WalletError};
use async_trait::async_trait;

/// Registry of account profiles, the root entities of the system. Profiles
/// are created at registration and never hard-deleted; balance state lives
/// in the journal, not here.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Register a profile. Fails when the email is already taken.
    async fn register(&self, profile: AccountProfile) -> Result<(), WalletError>;

    async fn find(&self, id: AccountId) -> Result<Option<AccountProfile>, WalletError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountProfile>, WalletError>;

    /// Every registered account id; the daily sweep walks this list.
    async fn account_ids(&self) -> Result<Vec<AccountId>, WalletError>;

    async fn count(&self) -> Result<usize, WalletError>;
}
