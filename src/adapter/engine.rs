use crate::{
    domain::{
        AccountState, CommandMetadata, EngineError, EventEnvelope, EventMetadata, WalletCommand,
        WalletError,
    },
    port::{
        Engine, EventCallback, EventHandler, Journal, LedgerIndex, NotificationStore, Processor,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Context for the Engine containing current state and the stores
pub struct EngineContext {
    /// The journal for persisting events
    pub journal: Arc<dyn Journal>,
    /// The materialized ledger, maintained by projection callbacks
    pub ledger: Arc<dyn LedgerIndex>,
    /// The notification inbox, written by the notifier callback
    pub notifications: Arc<dyn NotificationStore>,
    /// Current state of the account
    pub current_state: AccountState,
}

/// The main wallet engine implementation
pub struct WalletEngine {
    processor: Arc<dyn Processor>,
    /// Callbacks invoked after event persistence (ledger projection,
    /// notification fan-out, custom business logic)
    callbacks: Vec<Arc<dyn EventCallback>>,
}

impl WalletEngine {
    pub fn new(processor: Arc<dyn Processor>) -> Self {
        Self {
            processor,
            callbacks: Vec::with_capacity(10),
        }
    }

    /// Add a callback to be invoked after event persistence
    ///
    /// Callbacks run in registration order, before the handler's effects.
    pub fn with_callback(mut self, callback: Arc<dyn EventCallback>) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Invoke callbacks after event persistence
    async fn invoke_callbacks(
        &self,
        envelope: &EventEnvelope,
        context: &EngineContext,
    ) -> Result<(), WalletError> {
        use crate::domain::WalletEvent;
        use crate::port::CallbackContext;

        let callback_ctx = CallbackContext {
            journal: context.journal.clone(),
            ledger: context.ledger.clone(),
            notifications: context.notifications.clone(),
            envelope: envelope.clone(),
        };

        for callback in &self.callbacks {
            // Dispatch to the appropriate callback method based on event type
            match &envelope.event {
                WalletEvent::DepositRequested(event) => {
                    callback.on_deposit_requested(event, &callback_ctx).await?;
                }
                WalletEvent::DepositSettled(event) => {
                    callback.on_deposit_settled(event, &callback_ctx).await?;
                }
                WalletEvent::WithdrawalRequested(event) => {
                    callback
                        .on_withdrawal_requested(event, &callback_ctx)
                        .await?;
                }
                WalletEvent::WithdrawalSettled(event) => {
                    callback.on_withdrawal_settled(event, &callback_ctx).await?;
                }
                WalletEvent::ProfitAccrued(event) => {
                    callback.on_profit_accrued(event, &callback_ctx).await?;
                }
                WalletEvent::BalanceAdjusted(event) => {
                    callback.on_balance_adjusted(event, &callback_ctx).await?;
                }
                WalletEvent::BlockChanged(event) => {
                    callback.on_block_changed(event, &callback_ctx).await?;
                }
                WalletEvent::AccountReviewed(event) => {
                    callback.on_account_reviewed(event, &callback_ctx).await?;
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Engine for WalletEngine {
    type Context = EngineContext;

    /// Process a command by orchestrating the following steps:
    /// 1. Async load phase (can query ledger records, upload media)
    /// 2. Validation phase (apply business rules to current state)
    /// 3. Persist event to journal (journal assigns sequence number atomically)
    /// 4. Invoke callbacks (ledger projection, notifications)
    /// 5. Apply event to state (functional - returns new state)
    /// 6. Execute effects (with new state)
    ///
    /// INFRASTRUCTURE CONTRACT (caller's responsibility):
    /// - Caller MUST provide serialization (e.g., actor model with sequential processing)
    /// - Caller MUST verify sequence number ordering after persistence
    /// - Caller MUST update state atomically after successful processing
    ///
    /// This separation keeps the engine pure (stateless business logic) while
    /// pushing ordering guarantees to infrastructure (AccountActor).
    ///
    /// Returns (EventEnvelope, NewState) - includes sequence number for verification
    async fn process_command(
        &self,
        command: WalletCommand,
        metadata: CommandMetadata,
        context: &Self::Context,
    ) -> Result<(EventEnvelope, AccountState), WalletError> {
        // 1. Load phase: query dependencies (e.g., look up the request under
        //    review). Uses a snapshot of current state - this can be slow (I/O).
        //    Caller's serialization ensures state doesn't change during this.
        let stale_state = context.current_state.clone();
        let validate_fn = self.processor.load(command.clone(), &stale_state).await?;

        // 2. Validation phase: apply business rules to CURRENT state
        //    Infrastructure guarantee: state hasn't changed since load phase
        //    (AccountActor's sequential processing ensures this)
        let directive = validate_fn.apply(&context.current_state)?;

        // 3. Persistence phase: append event to journal
        //    Journal handles:
        //    - Idempotency check via deduplication_key
        //    - Atomic sequence number assignment (under journal's write lock)
        //    - Returns existing envelope if duplicate
        let event = directive
            .events
            .into_iter()
            .next()
            .ok_or(WalletError::Engine(EngineError::NoEvents))?;

        let event_metadata = EventMetadata {
            account_id: command.account_id(),
            deduplication_key: metadata.deduplication_key,
            timestamp: Utc::now(),
        };

        let envelope = context.journal.append(event, event_metadata).await?;

        // 4. Infrastructure callbacks: ledger projection and notifications
        //    are updated here, after the event is durable.
        self.invoke_callbacks(&envelope, context).await?;

        // 5. State transition: apply event to get new state
        //    This is functional (pure) - returns new state, doesn't mutate
        let new_state = envelope
            .apply(&context.current_state)
            .ok_or(WalletError::Engine(EngineError::StateTransitionFailed))?;

        // 6. Effects: execute side effects with new state
        for effect in directive.effects {
            effect.execute(&new_state).await?;
        }

        Ok((envelope, new_state))
    }

    fn processor(&self) -> &dyn Processor {
        self.processor.as_ref()
    }
}
