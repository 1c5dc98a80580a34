use crate::domain::{
    Inbox, Notification, NotificationId, Page, Paginated, ReadStatus, WalletError,
};
use async_trait::async_trait;

/// Per-account notification inbox with independent read flags for the user
/// and the admin side. Entries are immutable except for the two flags.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Append an entry. Rejects messages longer than the domain limit.
    async fn append(&self, notification: Notification) -> Result<(), WalletError>;

    /// List the entries visible to the given inbox, newest first, optionally
    /// filtered by that inbox's read flag.
    async fn list(
        &self,
        inbox: Inbox,
        status: Option<ReadStatus>,
        page: Page,
    ) -> Result<Paginated<Notification>, WalletError>;

    async fn unread_count(&self, inbox: Inbox) -> Result<usize, WalletError>;

    /// Mark one entry read for the given inbox. Only that inbox's flag is
    /// touched; marking an already-read entry is a no-op.
    async fn mark_read(&self, inbox: Inbox, id: NotificationId) -> Result<(), WalletError>;

    /// Mark every unread entry in the inbox as read.
    async fn mark_all_read(&self, inbox: Inbox) -> Result<(), WalletError>;

    /// Delete one entry visible to the inbox.
    async fn delete(&self, inbox: Inbox, id: NotificationId) -> Result<(), WalletError>;

    /// Delete every entry visible to the inbox.
    async fn delete_all(&self, inbox: Inbox) -> Result<(), WalletError>;
}
