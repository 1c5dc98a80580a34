use chrono::NaiveDate;

use crate::domain::{
    AccountId, DepositId, DepositRecord, WalletError, WithdrawalId, WithdrawalRecord,
};
use async_trait::async_trait;

/// RequestLookup provides read-only access to ledger records during the
/// command "load" phase: settle commands fetch the request under review,
/// the accrual command checks whether today's profit already exists.
#[async_trait]
pub trait RequestLookup: Send + Sync {
    /// Find a deposit request by id. None if it doesn't exist.
    async fn find_deposit(&self, id: DepositId) -> Result<Option<DepositRecord>, WalletError>;

    /// Find a withdrawal request by id. None if it doesn't exist.
    async fn find_withdrawal(
        &self,
        id: WithdrawalId,
    ) -> Result<Option<WithdrawalRecord>, WalletError>;

    /// Whether a profit entry already exists for this account on this UTC day.
    async fn profit_accrued_on(
        &self,
        account_id: AccountId,
        day: NaiveDate,
    ) -> Result<bool, WalletError>;
}
