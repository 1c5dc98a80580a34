use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    AccountId, DepositId, DepositRecord, LedgerSummary, Page, Paginated, ProfitRecord,
    ReviewDecision, WalletError, WithdrawalId, WithdrawalRecord,
};
use async_trait::async_trait;

/// The materialized ledger: deposit, withdrawal and profit records projected
/// from journal events. Append-only per record; settlement flips a pending
/// record to its terminal status exactly once.
///
/// This is a separate infrastructure concern from the Journal.
/// Implementations can use an in-memory map, Postgres, a document store, etc.
#[async_trait]
pub trait LedgerIndex: Send + Sync {
    async fn insert_deposit(&self, record: DepositRecord) -> Result<(), WalletError>;

    /// Settle a pending deposit. Fails with a state conflict when the record
    /// is already terminal, with not-found when it doesn't exist.
    async fn settle_deposit(
        &self,
        id: DepositId,
        decision: ReviewDecision,
        admin_notes: String,
        at: DateTime<Utc>,
    ) -> Result<(), WalletError>;

    async fn insert_withdrawal(&self, record: WithdrawalRecord) -> Result<(), WalletError>;

    async fn settle_withdrawal(
        &self,
        id: WithdrawalId,
        decision: ReviewDecision,
        admin_notes: String,
        at: DateTime<Utc>,
    ) -> Result<(), WalletError>;

    /// Insert a profit entry. Fails when an entry for the same account and
    /// day already exists - the accrual idempotency guard.
    async fn insert_profit(&self, record: ProfitRecord) -> Result<(), WalletError>;

    async fn deposits_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<DepositRecord>, WalletError>;

    async fn withdrawals_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<WithdrawalRecord>, WalletError>;

    async fn profits_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<ProfitRecord>, WalletError>;

    /// Whether a profit entry exists for this account on this UTC day.
    async fn profit_on(&self, account_id: AccountId, day: NaiveDate)
        -> Result<bool, WalletError>;

    /// Aggregates for the admin summary view.
    async fn summary(&self) -> Result<LedgerSummary, WalletError>;
}
