use crate::adapter::{AccountActorArguments, AccountActorMessage, CommandReceipt};
use crate::domain::{
    AccountId, AccountState, CommandMetadata, EngineError, WalletCommand, WalletError,
};
use crate::port::{Journal, LedgerIndex, MediaHost, NotificationStore, RequestLookup};
use ractor::{rpc::CallResult, Actor, ActorRef};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

type AccountActorRef = ActorRef<AccountActorMessage>;

/// AccountRegistry uses ractor's global registry for actor lookup
///
/// Instead of maintaining a local map (split-brain risk), we rely on
/// ractor's built-in registry which has cluster-wide awareness via
/// ActorRef::where_is(). If two callers race to spawn the same account
/// actor, only one succeeds (the named actor is a singleton).
#[derive(Clone)]
pub struct AccountRegistry {
    /// Track which accounts this process has touched (for shutdown and
    /// state collection only, not for routing)
    processed_accounts: Arc<Mutex<HashSet<AccountId>>>,
    journal: Arc<dyn Journal>,
    ledger: Arc<dyn LedgerIndex>,
    lookup: Arc<dyn RequestLookup>,
    notifications: Arc<dyn NotificationStore>,
    media: Arc<dyn MediaHost>,
    /// Namespace prefix for actor names (for test isolation)
    namespace: String,
}

impl AccountRegistry {
    pub fn new(
        journal: Arc<dyn Journal>,
        ledger: Arc<dyn LedgerIndex>,
        lookup: Arc<dyn RequestLookup>,
        notifications: Arc<dyn NotificationStore>,
        media: Arc<dyn MediaHost>,
    ) -> Self {
        Self {
            processed_accounts: Arc::new(Mutex::new(HashSet::new())),
            journal,
            ledger,
            lookup,
            notifications,
            media,
            namespace: String::new(),
        }
    }

    /// Create a registry with a custom namespace for test isolation.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = namespace;
        self
    }

    fn actor_name(&self, account_id: AccountId) -> String {
        if self.namespace.is_empty() {
            format!("account-{}", account_id)
        } else {
            format!("{}-account-{}", self.namespace, account_id)
        }
    }

    /// Get or spawn an account actor using ractor's global registry
    pub async fn get_or_spawn(&self, account_id: AccountId) -> Result<AccountActorRef, WalletError> {
        let actor_name = self.actor_name(account_id);

        // Fast path: check ractor's global registry
        if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name.clone()) {
            return Ok(actor_ref);
        }

        // Slow path: spawn actor with global name
        // Race condition: another caller might spawn it first and that's fine.
        // The registry ensures only one actor with this name exists.
        let args = AccountActorArguments {
            account_id,
            journal: self.journal.clone(),
            ledger: self.ledger.clone(),
            lookup: self.lookup.clone(),
            notifications: self.notifications.clone(),
            media: self.media.clone(),
        };

        match Actor::spawn(Some(actor_name.clone()), super::client::AccountActor, args).await {
            Ok((actor_ref, _handle)) => Ok(actor_ref),
            Err(e) => {
                // Spawn failed - maybe another caller just spawned it?
                // Try lookup one more time before giving up
                if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name) {
                    Ok(actor_ref)
                } else {
                    Err(WalletError::Engine(EngineError::ValidationError(format!(
                        "Failed to spawn or find account actor: {:?}",
                        e
                    ))))
                }
            }
        }
    }

    /// Process a command for an account (get_or_spawn + send message)
    pub async fn process_command(
        &self,
        account_id: AccountId,
        command: WalletCommand,
        metadata: CommandMetadata,
    ) -> Result<CommandReceipt, WalletError> {
        self.processed_accounts
            .lock()
            .unwrap()
            .insert(account_id);

        let actor_ref = self.get_or_spawn(account_id).await?;

        match actor_ref
            .call(
                |reply| AccountActorMessage::ProcessCommand(command, metadata, reply),
                Some(std::time::Duration::from_millis(1000)),
            )
            .await
        {
            Ok(CallResult::Success(result)) => result,
            Ok(CallResult::Timeout) => Err(WalletError::Engine(EngineError::ValidationError(
                "Actor call timeout".to_string(),
            ))),
            Ok(CallResult::SenderError) => Err(WalletError::Engine(EngineError::ValidationError(
                "Actor sender error".to_string(),
            ))),
            Err(e) => Err(WalletError::Engine(EngineError::ValidationError(format!(
                "Failed to send command to account actor: {:?}",
                e
            )))),
        }
    }

    /// Get state for a specific account (uses global registry lookup)
    pub async fn get_state(
        &self,
        account_id: AccountId,
    ) -> Result<Option<AccountState>, WalletError> {
        let actor_name = self.actor_name(account_id);

        if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name) {
            match actor_ref
                .call(
                    AccountActorMessage::GetState,
                    Some(std::time::Duration::from_millis(100)),
                )
                .await
            {
                Ok(CallResult::Success(state)) => Ok(Some(state)),
                Ok(CallResult::Timeout) => Err(WalletError::Engine(
                    EngineError::ValidationError("Actor call timeout".to_string()),
                )),
                Ok(CallResult::SenderError) => Err(WalletError::Engine(
                    EngineError::ValidationError("Actor sender error".to_string()),
                )),
                Err(e) => Err(WalletError::Engine(EngineError::ValidationError(format!(
                    "Failed to get state from account actor: {:?}",
                    e
                )))),
            }
        } else {
            Ok(None)
        }
    }

    /// Get or rebuild state for an account, spawning its actor if needed.
    /// Unlike get_state this works for accounts that have been idle since
    /// the process started: the actor replays the journal on spawn.
    pub async fn load_state(&self, account_id: AccountId) -> Result<AccountState, WalletError> {
        let actor_ref = self.get_or_spawn(account_id).await?;
        match actor_ref
            .call(
                AccountActorMessage::GetState,
                Some(std::time::Duration::from_millis(100)),
            )
            .await
        {
            Ok(CallResult::Success(state)) => Ok(state),
            Ok(CallResult::Timeout) => Err(WalletError::Engine(EngineError::ValidationError(
                "Actor call timeout".to_string(),
            ))),
            Ok(CallResult::SenderError) => Err(WalletError::Engine(
                EngineError::ValidationError("Actor sender error".to_string()),
            )),
            Err(e) => Err(WalletError::Engine(EngineError::ValidationError(format!(
                "Failed to get state from account actor: {:?}",
                e
            )))),
        }
    }

    /// Shutdown all account actors that this process has touched
    pub async fn shutdown_all(&self) {
        let account_ids: Vec<AccountId> = {
            let accounts = self.processed_accounts.lock().unwrap();
            accounts.iter().copied().collect()
        };

        for account_id in account_ids {
            let actor_name = self.actor_name(account_id);
            if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name) {
                actor_ref.stop(None);
            }
        }

        self.processed_accounts.lock().unwrap().clear();
    }
}
