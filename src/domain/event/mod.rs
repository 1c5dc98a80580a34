use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AccountId, DepositId, Platform, ProfitId, ReviewDecision, WithdrawalId,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WalletEvent {
    DepositRequested(DepositRequested),
    DepositSettled(DepositSettled),
    WithdrawalRequested(WithdrawalRequested),
    WithdrawalSettled(WithdrawalSettled),
    ProfitAccrued(ProfitAccrued),
    BalanceAdjusted(BalanceAdjusted),
    BlockChanged(BlockChanged),
    AccountReviewed(AccountReviewed),
}

impl WalletEvent {
    pub fn account_id(&self) -> AccountId {
        match self {
            WalletEvent::DepositRequested(e) => e.account_id,
            WalletEvent::DepositSettled(e) => e.account_id,
            WalletEvent::WithdrawalRequested(e) => e.account_id,
            WalletEvent::WithdrawalSettled(e) => e.account_id,
            WalletEvent::ProfitAccrued(e) => e.account_id,
            WalletEvent::BalanceAdjusted(e) => e.account_id,
            WalletEvent::BlockChanged(e) => e.account_id,
            WalletEvent::AccountReviewed(e) => e.account_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRequested {
    pub account_id: AccountId,
    pub deposit_id: DepositId,
    pub amount: f64,
    pub proof_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositSettled {
    pub account_id: AccountId,
    pub deposit_id: DepositId,
    pub amount: f64,
    pub decision: ReviewDecision,
    pub admin_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRequested {
    pub account_id: AccountId,
    pub withdrawal_id: WithdrawalId,
    pub amount: f64,
    pub platform: Platform,
    pub wallet_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalSettled {
    pub account_id: AccountId,
    pub withdrawal_id: WithdrawalId,
    pub amount: f64,
    pub platform: Platform,
    pub decision: ReviewDecision,
    pub admin_notes: String,
}

/// One day's profit credited to the account. Carries the deposit snapshot
/// and the rate so the ledger entry is self-describing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAccrued {
    pub account_id: AccountId,
    pub profit_id: ProfitId,
    pub amount: f64,
    pub deposit_amount: f64,
    pub rate: f64,
    pub day: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAdjusted {
    pub account_id: AccountId,
    pub previous_balance: f64,
    pub new_balance: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockChanged {
    pub account_id: AccountId,
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountReviewed {
    pub account_id: AccountId,
    pub decision: ReviewDecision,
    pub reason: Option<String>,
}
