use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    AccountId, DepositId, DepositRecord, LedgerSummary, Page, Paginated, ProfitRecord,
    ReviewDecision, Settlement, TransactionError, WalletError, WithdrawalId, WithdrawalRecord,
};
use crate::port::{LedgerIndex, RequestLookup};

struct LedgerData {
    deposits: HashMap<DepositId, DepositRecord>,
    withdrawals: HashMap<WithdrawalId, WithdrawalRecord>,
    profits: Vec<ProfitRecord>,
    /// Accrual idempotency guard: one profit entry per (account, UTC day).
    profit_days: HashSet<(AccountId, NaiveDate)>,
}

/// In-memory materialized ledger. Kept consistent with the journal by the
/// projection callback; production deployments would back this with a
/// document store or Postgres.
pub struct InMemoryLedger {
    data: Arc<RwLock<LedgerData>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LedgerData {
                deposits: HashMap::new(),
                withdrawals: HashMap::new(),
                profits: Vec::new(),
                profit_days: HashSet::new(),
            })),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerIndex for InMemoryLedger {
    async fn insert_deposit(&self, record: DepositRecord) -> Result<(), WalletError> {
        let mut data = self.data.write().await;
        data.deposits.insert(record.id, record);
        Ok(())
    }

    async fn settle_deposit(
        &self,
        id: DepositId,
        decision: ReviewDecision,
        admin_notes: String,
        at: DateTime<Utc>,
    ) -> Result<(), WalletError> {
        let mut data = self.data.write().await;
        let record = data
            .deposits
            .get_mut(&id)
            .ok_or(WalletError::Transaction(TransactionError::NotFound))?;

        if record.status.is_terminal() {
            return Err(WalletError::Transaction(TransactionError::StateConflict));
        }

        record.status = decision.settlement();
        record.admin_notes = admin_notes;
        record.updated_at = at;
        Ok(())
    }

    async fn insert_withdrawal(&self, record: WithdrawalRecord) -> Result<(), WalletError> {
        let mut data = self.data.write().await;
        data.withdrawals.insert(record.id, record);
        Ok(())
    }

    async fn settle_withdrawal(
        &self,
        id: WithdrawalId,
        decision: ReviewDecision,
        admin_notes: String,
        at: DateTime<Utc>,
    ) -> Result<(), WalletError> {
        let mut data = self.data.write().await;
        let record = data
            .withdrawals
            .get_mut(&id)
            .ok_or(WalletError::Transaction(TransactionError::NotFound))?;

        if record.status.is_terminal() {
            return Err(WalletError::Transaction(TransactionError::StateConflict));
        }

        record.status = decision.settlement();
        record.admin_notes = admin_notes;
        record.updated_at = at;
        Ok(())
    }

    async fn insert_profit(&self, record: ProfitRecord) -> Result<(), WalletError> {
        let mut data = self.data.write().await;

        if !data.profit_days.insert((record.account_id, record.day)) {
            return Err(WalletError::Transaction(TransactionError::AlreadyAccrued));
        }

        data.profits.push(record);
        Ok(())
    }

    async fn deposits_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<DepositRecord>, WalletError> {
        let data = self.data.read().await;
        let mut records: Vec<DepositRecord> = data
            .deposits
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Paginated::slice(records, page))
    }

    async fn withdrawals_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<WithdrawalRecord>, WalletError> {
        let data = self.data.read().await;
        let mut records: Vec<WithdrawalRecord> = data
            .withdrawals
            .values()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Paginated::slice(records, page))
    }

    async fn profits_for(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<ProfitRecord>, WalletError> {
        let data = self.data.read().await;
        let mut records: Vec<ProfitRecord> = data
            .profits
            .iter()
            .filter(|r| r.account_id == account_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Paginated::slice(records, page))
    }

    async fn profit_on(
        &self,
        account_id: AccountId,
        day: NaiveDate,
    ) -> Result<bool, WalletError> {
        let data = self.data.read().await;
        Ok(data.profit_days.contains(&(account_id, day)))
    }

    async fn summary(&self) -> Result<LedgerSummary, WalletError> {
        let data = self.data.read().await;

        let approved_deposit_total = data
            .deposits
            .values()
            .filter(|r| r.status == Settlement::Approved)
            .map(|r| r.amount)
            .sum();
        let approved_withdrawal_total = data
            .withdrawals
            .values()
            .filter(|r| r.status == Settlement::Approved)
            .map(|r| r.amount)
            .sum();
        let pending_deposits = data
            .deposits
            .values()
            .filter(|r| r.status == Settlement::Pending)
            .count();
        let pending_withdrawals = data
            .withdrawals
            .values()
            .filter(|r| r.status == Settlement::Pending)
            .count();

        Ok(LedgerSummary {
            approved_deposit_total,
            approved_withdrawal_total,
            pending_deposits,
            pending_withdrawals,
        })
    }
}

// The load phase reads requests through the narrower lookup port; the
// in-memory ledger serves both.
#[async_trait]
impl RequestLookup for InMemoryLedger {
    async fn find_deposit(&self, id: DepositId) -> Result<Option<DepositRecord>, WalletError> {
        let data = self.data.read().await;
        Ok(data.deposits.get(&id).cloned())
    }

    async fn find_withdrawal(
        &self,
        id: WithdrawalId,
    ) -> Result<Option<WithdrawalRecord>, WalletError> {
        let data = self.data.read().await;
        Ok(data.withdrawals.get(&id).cloned())
    }

    async fn profit_accrued_on(
        &self,
        account_id: AccountId,
        day: NaiveDate,
    ) -> Result<bool, WalletError> {
        self.profit_on(account_id, day).await
    }
}
