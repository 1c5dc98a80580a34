use crate::{
    adapter::{CommandProcessor, EngineContext, LedgerProjection, Notifier, WalletEngine},
    domain::{
        AccountId, AccountState, CommandMetadata, EventEnvelope, WalletCommand, WalletError,
    },
    port::{
        CommandServices, Engine, EventHandler, Journal, LedgerIndex, MediaHost,
        NotificationStore, RequestLookup,
    },
};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;

/// What a successfully processed command hands back: the persisted envelope
/// and the account state after applying it.
#[derive(Debug, Clone)]
pub struct CommandReceipt {
    pub envelope: EventEnvelope,
    pub state: AccountState,
}

/// Messages that can be sent to an AccountActor
pub enum AccountActorMessage {
    ProcessCommand(
        WalletCommand,
        CommandMetadata,
        RpcReplyPort<Result<CommandReceipt, WalletError>>,
    ),
    GetState(RpcReplyPort<AccountState>),
}

pub struct AccountActorArguments {
    pub account_id: AccountId,
    pub journal: Arc<dyn Journal>,
    pub ledger: Arc<dyn LedgerIndex>,
    pub lookup: Arc<dyn RequestLookup>,
    pub notifications: Arc<dyn NotificationStore>,
    pub media: Arc<dyn MediaHost>,
}

pub struct AccountActorState {
    pub account_id: AccountId,
    pub account_state: AccountState,
    pub engine: Arc<dyn Engine<Context = EngineContext> + Send + Sync>,
    pub journal: Arc<dyn Journal>,
    pub ledger: Arc<dyn LedgerIndex>,
    pub notifications: Arc<dyn NotificationStore>,
    /// Last applied sequence number (global journal sequence, not per-account)
    /// Used to guarantee events are applied in order: seq[n] > seq[n-1]
    /// Also enables idempotent handling of at-least-once redeliveries
    pub last_sequence: u64,
}

/// AccountActor manages a single account
/// Each account gets its own actor instance with isolated state - this is
/// the single-writer queue that makes concurrent approvals and the accrual
/// sweep safe against lost updates.
pub struct AccountActor;

impl Actor for AccountActor {
    type Msg = AccountActorMessage;
    type State = AccountActorState;
    type Arguments = AccountActorArguments;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        tracing::info!("AccountActor starting for account {}", args.account_id);

        let services = CommandServices {
            lookup: args.lookup.clone(),
            media: args.media.clone(),
        };
        let processor = Arc::new(CommandProcessor::new(services));

        let engine = Arc::new(
            WalletEngine::new(processor)
                .with_callback(Arc::new(LedgerProjection))
                .with_callback(Arc::new(Notifier)),
        );

        // Rebuild the account state from its slice of the journal.
        let mut account_state = AccountState::new(chrono::Utc::now());
        let mut last_sequence = 0;
        for envelope in args.journal.find_by_account(args.account_id).await? {
            match envelope.apply(&account_state) {
                Some(next) => account_state = next,
                None => {
                    tracing::warn!(
                        "Skipping unapplicable event during replay: account={} seq={}",
                        args.account_id,
                        envelope.sequence_nr
                    );
                }
            }
            last_sequence = envelope.sequence_nr;
        }

        Ok(AccountActorState {
            account_id: args.account_id,
            account_state,
            engine,
            journal: args.journal,
            ledger: args.ledger,
            notifications: args.notifications,
            last_sequence,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            AccountActorMessage::ProcessCommand(command, metadata, reply) => {
                // CRITICAL: This actor provides ordering guarantees (infrastructure concern)!
                // We have &mut state, which means:
                // 1. Only ONE message processes at a time for this account
                // 2. Validation + persistence + state update happen atomically
                // 3. Events are applied in strict sequence order
                //
                // Flow: validate -> persist -> verify sequence -> update state
                // If validation fails: state unchanged, nothing persisted
                // If persistence fails: state unchanged
                // If sequence is wrong: PANIC (infrastructure bug)
                // If success: state updated atomically

                let context = EngineContext {
                    journal: state.journal.clone(),
                    ledger: state.ledger.clone(),
                    notifications: state.notifications.clone(),
                    current_state: state.account_state.clone(),
                };

                match state
                    .engine
                    .process_command(command, metadata, &context)
                    .await
                {
                    Ok((envelope, new_state)) => {
                        // INFRASTRUCTURE GUARANTEE: Verify event ordering
                        // Sequence numbers are global (shared across all accounts
                        // in the journal), so we verify monotonic ordering for
                        // this account's events.
                        //
                        // Cases:
                        // 1. seq > last_sequence -> Apply (normal case)
                        // 2. seq == last_sequence -> Skip (at-least-once duplicate)
                        // 3. seq < last_sequence -> PANIC (ordering violation)

                        if envelope.sequence_nr < state.last_sequence {
                            panic!(
                                "CRITICAL: Event ordering violation for account {}! \
                                 Last sequence was {}, got {}. This indicates a bug in \
                                 the infrastructure (out-of-order delivery).",
                                state.account_id, state.last_sequence, envelope.sequence_nr
                            );
                        }

                        if envelope.sequence_nr == state.last_sequence {
                            // Duplicate delivery - already applied, skip
                            tracing::debug!(
                                "Account {} skipping duplicate event: seq={}",
                                state.account_id,
                                envelope.sequence_nr
                            );
                            let _ = reply.send(Ok(CommandReceipt {
                                envelope,
                                state: state.account_state.clone(),
                            }));
                            return Ok(());
                        }

                        // Normal case: apply new event
                        state.account_state = new_state.clone();
                        state.last_sequence = envelope.sequence_nr;

                        tracing::debug!(
                            "Account {} applied event: seq={}",
                            state.account_id,
                            envelope.sequence_nr
                        );
                        let _ = reply.send(Ok(CommandReceipt {
                            envelope,
                            state: new_state,
                        }));
                    }
                    Err(e) => {
                        // Validation or persistence failed - state unchanged
                        tracing::debug!(
                            "Account {} failed to process command: {}",
                            state.account_id,
                            e
                        );
                        let _ = reply.send(Err(e));
                    }
                }
            }

            AccountActorMessage::GetState(reply) => {
                let _ = reply.send(state.account_state.clone());
            }
        }

        Ok(())
    }
}

/// Type alias for AccountActor reference
pub type AccountActorRef = ActorRef<AccountActorMessage>;
