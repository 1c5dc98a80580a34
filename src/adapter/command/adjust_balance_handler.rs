use crate::{
    domain::{
        AccountState, AdjustBalance, BalanceAdjusted, EngineError, TransactionError, WalletError,
        WalletEvent,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for AdjustBalance {
    type Resource = ();
    type Entity = ();

    async fn load(
        &self,
        _stale_state: &AccountState,
        _services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        Ok(())
    }

    fn validate(
        &self,
        _state: &AccountState,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        if self.new_balance < 0.0 {
            return Err(WalletError::Transaction(TransactionError::InvalidAmount));
        }

        if self.reason.trim().is_empty() {
            return Err(WalletError::Engine(EngineError::ValidationError(
                "Reason for balance adjustment is required".to_string(),
            )));
        }

        Ok(())
    }

    fn emit(
        &self,
        state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError> {
        Ok(vec![WalletEvent::BalanceAdjusted(BalanceAdjusted {
            account_id: self.account_id,
            previous_balance: state.deposit_amount,
            new_balance: self.new_balance,
            reason: self.reason.clone(),
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
