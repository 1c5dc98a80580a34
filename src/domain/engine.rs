use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{AccountId, WalletEvent},
    port::EffectFn,
};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeduplicationKey(String);

impl DeduplicationKey {
    pub fn new(identifier: String) -> Self {
        Self(identifier)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Envelope wrapping an event with ordering metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Global sequence number for ordering guarantees
    pub sequence_nr: u64,
    /// The domain event
    pub event: WalletEvent,
    /// When the event was processed
    pub timestamp: DateTime<Utc>,
    /// Account the event belongs to
    pub account_id: AccountId,
    /// Deduplication key from the command source (API request ID, sweep day, etc.)
    pub deduplication_key: DeduplicationKey,
}

/// Metadata about the command for deduplication
///
/// This allows the engine to work with any message source:
/// - HTTP API: use idempotency key header
/// - Daily sweep: use the account + UTC day
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Opaque identifier that uniquely identifies this command instance
    /// Examples: "api:abc-123", "sweep:2024-05-01:<account>"
    pub deduplication_key: DeduplicationKey,
}

/// Directive contains events to persist and effects to execute
pub struct Directive {
    /// Events to persist to the journal (without sequence numbers yet)
    pub events: Vec<WalletEvent>,
    /// Effects to execute after persistence (async, can be slow)
    pub effects: Vec<Box<dyn EffectFn>>,
}
