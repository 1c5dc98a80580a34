use crate::{
    domain::{
        AccountReviewed, AccountState, EngineError, ReviewAccount, ReviewDecision, ReviewStatus,
        TransactionError, WalletError, WalletEvent,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for ReviewAccount {
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
        state: &AccountState,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        if state.review != ReviewStatus::Pending {
            return Err(WalletError::Transaction(TransactionError::StateConflict));
        }

        if self.decision == ReviewDecision::Reject
            && self.reason.as_deref().unwrap_or("").trim().is_empty()
        {
            return Err(WalletError::Engine(EngineError::ValidationError(
                "Reason for rejection is required".to_string(),
            )));
        }

        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError> {
        Ok(vec![WalletEvent::AccountReviewed(AccountReviewed {
            account_id: self.account_id,
            decision: self.decision,
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
