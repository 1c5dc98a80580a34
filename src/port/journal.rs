use crate::domain::{AccountId, EventEnvelope, EventMetadata, WalletError, WalletEvent};
use async_trait::async_trait;

/// Journal is responsible for appending and replaying events to the log.
/// It stores the events in persistent storage and replays them later to
/// reconstruct the state of an account.
#[async_trait]
pub trait Journal: Send + Sync {
    /// Append an event to the log
    ///
    /// The journal constructs the EventEnvelope by:
    /// - Assigning the next sequence number atomically
    /// - Adding the provided metadata
    /// - Wrapping the event
    ///
    /// Returns the complete EventEnvelope with assigned sequence number.
    /// Idempotent via deduplication_key - returns existing envelope if duplicate.
    async fn append(
        &self,
        event: WalletEvent,
        metadata: EventMetadata,
    ) -> Result<EventEnvelope, WalletError>;

    /// Replay events starting from a sequence number
    /// Returns events in order
    async fn replay(&self, from_sequence: Option<u64>) -> Result<Vec<EventEnvelope>, WalletError>;

    /// Get the highest sequence number (current position in the log)
    async fn highest_sequence(&self) -> Result<Option<u64>, WalletError>;

    /// Find events belonging to one account, in sequence order
    async fn find_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<EventEnvelope>, WalletError>;
}
