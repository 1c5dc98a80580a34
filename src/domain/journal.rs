use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, DeduplicationKey};

/// Metadata needed to construct an event envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    pub account_id: AccountId,
    pub deduplication_key: DeduplicationKey,
    pub timestamp: DateTime<Utc>,
}
