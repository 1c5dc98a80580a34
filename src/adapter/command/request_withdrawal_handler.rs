use crate::{
    domain::{
        AccountState, RequestWithdrawal, TransactionError, WalletError, WalletEvent, WithdrawalId,
        WithdrawalRequested,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
impl CommandHandler for RequestWithdrawal {
    type Resource = WithdrawalId;
    type Entity = ();

    async fn load(
        &self,
        _stale_state: &AccountState,
        _services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        Ok(Uuid::new_v4())
    }

    fn validate(
        &self,
        state: &AccountState,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        if self.amount <= 0.0 {
            return Err(WalletError::Transaction(TransactionError::InvalidAmount));
        }

        if state.is_blocked() {
            return Err(WalletError::Transaction(TransactionError::AccountBlocked));
        }

        // The balance gate runs at request time: an uncoverable request is
        // refused outright and no ledger record is created.
        if state.total_amount < self.amount {
            return Err(WalletError::Transaction(
                TransactionError::InsufficientFunds,
            ));
        }

        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError> {
        Ok(vec![WalletEvent::WithdrawalRequested(WithdrawalRequested {
            account_id: self.account_id,
            withdrawal_id: *resource,
            amount: self.amount,
            platform: self.platform,
            wallet_address: self.wallet_address.clone(),
        })])
    }

    async fn effect(
        &self,
        _previous_state: &AccountState,
        _state: &AccountState,
        _resource: &Self::Resource,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<(), WalletError> {
        Ok(())
    }
}
