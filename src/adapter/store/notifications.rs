use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    EngineError, Inbox, Notification, NotificationId, Page, Paginated, ReadStatus,
    TransactionError, WalletError, MAX_MESSAGE_LEN,
};
use crate::port::NotificationStore;

/// In-memory notification inbox.
pub struct InMemoryNotifications {
    entries: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotifications {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryNotifications {
    fn default() -> Self {
        Self::new()
    }
}

fn visible(entry: &Notification, inbox: Inbox) -> bool {
    match inbox {
        Inbox::Account(account_id) => entry.account_id == Some(account_id),
        Inbox::Admin => true,
    }
}

fn set_flag(entry: &mut Notification, inbox: Inbox, status: ReadStatus) {
    match inbox {
        Inbox::Account(_) => entry.user_status = status,
        Inbox::Admin => entry.admin_status = status,
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotifications {
    async fn append(&self, notification: Notification) -> Result<(), WalletError> {
        if notification.message.len() > MAX_MESSAGE_LEN {
            return Err(WalletError::Engine(EngineError::ValidationError(format!(
                "Message cannot exceed {} characters",
                MAX_MESSAGE_LEN
            ))));
        }

        let mut entries = self.entries.write().await;
        entries.push(notification);
        Ok(())
    }

    async fn list(
        &self,
        inbox: Inbox,
        status: Option<ReadStatus>,
        page: Page,
    ) -> Result<Paginated<Notification>, WalletError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<Notification> = entries
            .iter()
            .filter(|e| visible(e, inbox))
            .filter(|e| status.map_or(true, |s| e.status_for(inbox) == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Paginated::slice(matching, page))
    }

    async fn unread_count(&self, inbox: Inbox) -> Result<usize, WalletError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| visible(e, inbox) && e.status_for(inbox) == ReadStatus::Unread)
            .count())
    }

    async fn mark_read(&self, inbox: Inbox, id: NotificationId) -> Result<(), WalletError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id && visible(e, inbox))
            .ok_or(WalletError::Transaction(TransactionError::NotFound))?;

        set_flag(entry, inbox, ReadStatus::Read);
        Ok(())
    }

    async fn mark_all_read(&self, inbox: Inbox) -> Result<(), WalletError> {
        let mut entries = self.entries.write().await;
        for entry in entries.iter_mut().filter(|e| visible(e, inbox)) {
            set_flag(entry, inbox, ReadStatus::Read);
        }
        Ok(())
    }

    async fn delete(&self, inbox: Inbox, id: NotificationId) -> Result<(), WalletError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| !(e.id == id && visible(e, inbox)));

        if entries.len() == before {
            return Err(WalletError::Transaction(TransactionError::NotFound));
        }
        Ok(())
    }

    async fn delete_all(&self, inbox: Inbox) -> Result<(), WalletError> {
        let mut entries = self.entries.write().await;
        entries.retain(|e| !visible(e, inbox));
        Ok(())
    }
}
