use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::AccountId;

pub type NotificationId = Uuid;

/// Longest message the inbox will store.
pub const MAX_MESSAGE_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Deposit,
    Withdrawal,
    Profit,
    General,
    BalanceIncrease,
    BalanceDecrease,
    BalanceAdjustment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Read,
    Unread,
}

/// Which side of the inbox an operation acts on. The user scope is bound to
/// one account and flips `user_status`; the admin scope sees every entry and
/// flips `admin_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbox {
    Account(AccountId),
    Admin,
}

/// An inbox entry. Immutable once written except for the two independent
/// read flags: the same entry can be read for the user and unread for the
/// admin, or the other way around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// Absent for admin-broadcast entries that target no single account.
    pub account_id: Option<AccountId>,
    pub message: String,
    pub kind: NotificationKind,
    pub user_status: ReadStatus,
    pub admin_status: ReadStatus,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        account_id: Option<AccountId>,
        kind: NotificationKind,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            message: message.into(),
            kind,
            user_status: ReadStatus::Unread,
            admin_status: ReadStatus::Unread,
            action_url: None,
            created_at,
        }
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// The read flag visible to the given inbox scope.
    pub fn status_for(&self, inbox: Inbox) -> ReadStatus {
        match inbox {
            Inbox::Account(_) => self.user_status,
            Inbox::Admin => self.admin_status,
        }
    }
}
