use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    domain::{AccountState, WalletError, WalletEvent},
    port::{MediaHost, RequestLookup},
};

/// External collaborators a command may need while loading: the ledger
/// lookup for referenced requests and the media host for proof uploads.
pub struct CommandServices {
    pub lookup: Arc<dyn RequestLookup>,
    pub media: Arc<dyn MediaHost>,
}

#[async_trait]
pub trait CommandHandler {
    type Resource;
    type Entity;

    /// Load resources required to process the command
    ///
    /// This runs CONCURRENTLY with potentially stale state (fast-moving state is OK).
    /// Can be slow - do DB queries, media uploads, etc.
    async fn load(
        &self,
        stale_state: &AccountState,
        services: &CommandServices,
    ) -> Result<Self::Resource, WalletError>;

    /// Validate command against ACTUAL state
    ///
    /// This runs with EXCLUSIVE ACCESS to actual state - MUST BE FAST!
    /// No async, no I/O, just pure business logic.
    fn validate(
        &self,
        actual_state: &AccountState,
        resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError>;

    /// Emit events from validated entity
    ///
    /// MUST BE FAST - no async, no I/O.
    /// Just creates events from the validated entity.
    /// Returns a Vec to support multiple events per command.
    fn emit(
        &self,
        state: &AccountState,
        entity: &Self::Entity,
        resource: &Self::Resource,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError>;

    /// Execute side effects after event is persisted
    ///
    /// Can be slow - happens after persistence and state update
    async fn effect(
        &self,
        previous_state: &AccountState,
        state: &AccountState,
        resource: &Self::Resource,
        entity: &Self::Entity,
        timestamp: DateTime<Utc>,
    ) -> Result<(), WalletError>;
}
