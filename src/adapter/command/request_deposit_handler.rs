use crate::{
    domain::{
        AccountState, DepositId, DepositRequested, RequestDeposit, TransactionError, WalletError,
        WalletEvent,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Proof image uploaded, record id assigned, waiting for validation.
#[derive(Debug, Clone)]
pub struct DepositDraft {
    pub deposit_id: DepositId,
    pub proof_url: String,
}

#[async_trait]
impl CommandHandler for RequestDeposit {
    type Resource = DepositDraft;
    type Entity = ();

    async fn load(
        &self,
        _stale_state: &AccountState,
        services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        // Reject a bad amount before paying for the upload.
        if self.amount <= 0.0 {
            return Err(WalletError::Transaction(TransactionError::InvalidAmount));
        }

        let proof_url = services
            .media
            .upload("deposit-proofs", &self.proof.file_name, &self.proof.bytes)
            .await?;

        Ok(DepositDraft {
            deposit_id: Uuid::new_v4(),
            proof_url,
        })
    }

    fn validate(
        &self,
        state: &AccountState,
        _resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        // Validate amount is positive (defense in depth)
        if self.amount <= 0.0 {
            return Err(WalletError::Transaction(TransactionError::InvalidAmount));
        }

        if state.is_blocked() {
            return Err(WalletError::Transaction(TransactionError::AccountBlocked));
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
        Ok(vec![WalletEvent::DepositRequested(DepositRequested {
            account_id: self.account_id,
            deposit_id: resource.deposit_id,
            amount: self.amount,
            proof_url: resource.proof_url.clone(),
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
