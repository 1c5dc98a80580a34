use crate::{
    domain::{
        AccountState, DepositRecord, DepositSettled, Settlement, SettleDeposit, TransactionError,
        WalletError, WalletEvent,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for SettleDeposit {
    type Resource = DepositRecord;
    type Entity = ();

    async fn load(
        &self,
        _stale_state: &AccountState,
        services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        services
            .lookup
            .find_deposit(self.deposit_id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))
    }

    fn validate(
        &self,
        _state: &AccountState,
        resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        // The record must belong to the account this command was routed to.
        if resource.account_id != self.account_id {
            return Err(WalletError::Transaction(TransactionError::NotFound));
        }

        if resource.status != Settlement::Pending {
            return Err(WalletError::Transaction(TransactionError::StateConflict));
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
        Ok(vec![WalletEvent::DepositSettled(DepositSettled {
            account_id: self.account_id,
            deposit_id: self.deposit_id,
            amount: resource.amount,
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
