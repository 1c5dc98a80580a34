use serde::{Deserialize, Serialize};

use crate::domain::{
    AccountId, DepositId, Platform, ReviewDecision, WithdrawalId,
};

/// A command is a single requested action against one account. Commands are
/// validated against the account's actual state, persisted as events, and
/// only then applied - the command itself never mutates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WalletCommand {
    RequestDeposit(RequestDeposit),
    RequestWithdrawal(RequestWithdrawal),
    SettleDeposit(SettleDeposit),
    SettleWithdrawal(SettleWithdrawal),
    AccrueProfit(AccrueProfit),
    AdjustBalance(AdjustBalance),
    SetBlocked(SetBlocked),
    ReviewAccount(ReviewAccount),
}

impl WalletCommand {
    pub fn account_id(&self) -> AccountId {
        match self {
            WalletCommand::RequestDeposit(cmd) => cmd.account_id,
            WalletCommand::RequestWithdrawal(cmd) => cmd.account_id,
            WalletCommand::SettleDeposit(cmd) => cmd.account_id,
            WalletCommand::SettleWithdrawal(cmd) => cmd.account_id,
            WalletCommand::AccrueProfit(cmd) => cmd.account_id,
            WalletCommand::AdjustBalance(cmd) => cmd.account_id,
            WalletCommand::SetBlocked(cmd) => cmd.account_id,
            WalletCommand::ReviewAccount(cmd) => cmd.account_id,
        }
    }
}

/// Raw proof-of-payment image submitted with a deposit request. Uploaded to
/// the media host during the load phase; only the resulting URL is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A deposit request credits nothing by itself: it records a pending ledger
/// entry carrying the proof image and waits for admin moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDeposit {
    pub account_id: AccountId,
    pub amount: f64,
    pub proof: ProofUpload,
}

/// A withdrawal request checks the total balance up front: if the account
/// cannot cover the amount the request fails and no record is created.
/// Otherwise a pending ledger entry waits for admin moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestWithdrawal {
    pub account_id: AccountId,
    pub amount: f64,
    pub platform: Platform,
    pub wallet_address: String,
}

/// Admin verdict on a pending deposit. Approval credits the deposit balance;
/// rejection settles the record with no balance change. Either way the
/// settlement is terminal - a second verdict is a state conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleDeposit {
    pub account_id: AccountId,
    pub deposit_id: DepositId,
    pub decision: ReviewDecision,
    pub admin_notes: String,
}

/// Admin verdict on a pending withdrawal. Approval re-checks the balance
/// against actual state before debiting; rejection settles with no change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleWithdrawal {
    pub account_id: AccountId,
    pub withdrawal_id: WithdrawalId,
    pub decision: ReviewDecision,
    pub admin_notes: String,
}

/// Credit one day's profit: 1% of the deposit balance, at most once per
/// account per UTC day. Issued by the daily sweep and by the manual
/// single-account endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrueProfit {
    pub account_id: AccountId,
}

/// Admin override that sets the deposit balance to an explicit value.
/// Requires a reason, which ends up in the user's notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustBalance {
    pub account_id: AccountId,
    pub new_balance: f64,
    pub reason: String,
}

/// Block or unblock the account. Blocked accounts cannot transact and are
/// skipped by the profit sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBlocked {
    pub account_id: AccountId,
    pub blocked: bool,
}

/// Admin review of a freshly registered account; only valid while the
/// review is still pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAccount {
    pub account_id: AccountId,
    pub decision: ReviewDecision,
    pub reason: Option<String>,
}
