use crate::{
    domain::{
        AccountState, ReviewDecision, Settlement, SettleWithdrawal, TransactionError, WalletError,
        WalletEvent, WithdrawalRecord, WithdrawalSettled,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for SettleWithdrawal {
    type Resource = WithdrawalRecord;
    type Entity = ();

    async fn load(
        &self,
        _stale_state: &AccountState,
        services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        services
            .lookup
            .find_withdrawal(self.withdrawal_id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))
    }

    fn validate(
        &self,
        state: &AccountState,
        resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        if resource.account_id != self.account_id {
            return Err(WalletError::Transaction(TransactionError::NotFound));
        }

        if resource.status != Settlement::Pending {
            return Err(WalletError::Transaction(TransactionError::StateConflict));
        }

        // Approval re-checks the balance against ACTUAL state: it may have
        // moved since the request was made.
        if self.decision == ReviewDecision::Approve && state.total_amount < resource.amount {
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
        Ok(vec![WalletEvent::WithdrawalSettled(WithdrawalSettled {
            account_id: self.account_id,
            withdrawal_id: self.withdrawal_id,
            amount: resource.amount,
            platform: resource.platform,
            decision: self.decision,
            admin_notes: self.admin_notes.clone(),
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
