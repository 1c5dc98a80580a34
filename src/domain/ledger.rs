use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::AccountId;

pub type DepositId = Uuid;
pub type WithdrawalId = Uuid;
pub type ProfitId = Uuid;

/// Settlement state of a moderated ledger request.
///
/// Transitions are monotonic: Pending -> Approved or Pending -> Rejected,
/// never back, never re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Settlement {
    Pending,
    Approved,
    Rejected,
}

impl Settlement {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Settlement::Pending)
    }
}

/// Admin verdict on a pending request or account review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn settlement(&self) -> Settlement {
        match self {
            ReviewDecision::Approve => Settlement::Approved,
            ReviewDecision::Reject => Settlement::Rejected,
        }
    }
}

/// Destination platform for a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Binance,
    TrustWallet,
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Binance => write!(f, "Binance"),
            Platform::TrustWallet => write!(f, "Trust Wallet"),
            Platform::Other => write!(f, "Other"),
        }
    }
}

/// A deposit request awaiting (or past) admin moderation. The proof image
/// lives on the media host; only its URL is recorded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRecord {
    pub id: DepositId,
    pub account_id: AccountId,
    pub amount: f64,
    pub proof_url: String,
    pub status: Settlement,
    pub admin_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A withdrawal request awaiting (or past) admin moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRecord {
    pub id: WithdrawalId,
    pub account_id: AccountId,
    pub amount: f64,
    pub platform: Platform,
    pub wallet_address: String,
    pub status: Settlement,
    pub admin_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One day's credited profit for one account. Created already settled;
/// at most one exists per (account, day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitRecord {
    pub id: ProfitId,
    pub account_id: AccountId,
    pub amount: f64,
    /// Snapshot of the deposit balance the rate was applied to.
    pub deposit_amount: f64,
    pub rate: f64,
    pub day: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A row in the combined per-account transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionView {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub status: Settlement,
    pub date: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Profit,
}

/// Aggregate figures for the admin summary view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub approved_deposit_total: f64,
    pub approved_withdrawal_total: f64,
    pub pending_deposits: usize,
    pub pending_withdrawals: usize,
}
