use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AccountId = Uuid;

/// Daily profit rate applied by the accrual job (1% of the deposit balance).
pub const DAILY_PROFIT_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

/// Admin review of a freshly registered account. Until approved the account
/// can hold state but the auth boundary will not let the owner in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Mutable per-account balance state, rebuilt from journal events.
///
/// Invariant: total_amount == deposit_amount + profit_amount after every
/// applied event, and no balance field ever goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountState {
    pub deposit_amount: f64,
    pub profit_amount: f64,
    pub total_amount: f64,
    pub status: AccountStatus,
    pub review: ReviewStatus,
    pub last_activity: DateTime<Utc>,
}

impl AccountState {
    /// Fresh state for a newly registered account: zero balances, active,
    /// awaiting admin review.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            deposit_amount: 0.0,
            profit_amount: 0.0,
            total_amount: 0.0,
            status: AccountStatus::Active,
            review: ReviewStatus::Pending,
            last_activity: now,
        }
    }

    pub fn recompute_total(mut self) -> Self {
        self.total_amount = self.deposit_amount + self.profit_amount;
        self
    }

    pub fn is_blocked(&self) -> bool {
        self.status == AccountStatus::Blocked
    }
}

/// Immutable registration record kept in the account directory. Credentials
/// live behind the auth boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl AccountProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Read-model summary returned by the balance query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub deposit: f64,
    pub profit: f64,
    pub total: f64,
    pub last_updated: DateTime<Utc>,
}

impl From<&AccountState> for BalanceSummary {
    fn from(state: &AccountState) -> Self {
        Self {
            deposit: state.deposit_amount,
            profit: state.profit_amount,
            total: state.total_amount,
            last_updated: state.last_activity,
        }
    }
}
