use crate::{
    domain::{AccountState, BlockChanged, SetBlocked, WalletError, WalletEvent},
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl CommandHandler for SetBlocked {
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
        // Re-blocking a blocked account is allowed and simply re-notifies,
        // matching the admin panel's behavior.
        Ok(())
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError> {
        Ok(vec![WalletEvent::BlockChanged(BlockChanged {
            account_id: self.account_id,
            blocked: self.blocked,
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
