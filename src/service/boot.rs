use std::sync::Arc;

use crate::adapter::{
    AccountRegistry, InMemoryDirectory, InMemoryJournal, InMemoryLedger, InMemoryMediaHost,
    InMemoryNotifications,
};
use crate::port::{Journal, LedgerIndex, MediaHost, NotificationStore, RequestLookup};
use crate::service::WalletService;

/// Setup the wallet system and return the service facade
///
/// This creates all the infrastructure:
/// - InMemoryJournal (shared event store)
/// - InMemoryLedger (materialized deposit/withdrawal/profit records)
/// - InMemoryNotifications (per-account inbox)
/// - InMemoryDirectory (account profiles)
/// - InMemoryMediaHost (proof image stand-in)
/// - AccountRegistry (spawns account actors on demand)
///
/// Architecture:
/// - API/scheduler -> WalletService -> AccountRegistry -> AccountActor (per account) -> InMemoryJournal
/// - Each AccountActor writes directly to the shared journal (no central actor)
/// - Ledger and inbox maintained via engine callbacks (infrastructure concern)
/// - Simple, efficient, ready for database replacement
pub async fn boot() -> WalletService {
    boot_with_namespace(String::new()).await
}

/// Boot with a namespace prefix on actor names, so concurrent test
/// processes don't collide in ractor's global registry.
pub async fn boot_with_namespace(namespace: String) -> WalletService {
    let journal: Arc<dyn Journal> = Arc::new(InMemoryJournal::new());
    let ledger_store = Arc::new(InMemoryLedger::new());
    let ledger: Arc<dyn LedgerIndex> = ledger_store.clone();
    let lookup: Arc<dyn RequestLookup> = ledger_store;
    let notifications: Arc<dyn NotificationStore> = Arc::new(InMemoryNotifications::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let media: Arc<dyn MediaHost> = Arc::new(InMemoryMediaHost::new());

    let registry = AccountRegistry::new(
        journal.clone(),
        ledger.clone(),
        lookup.clone(),
        notifications.clone(),
        media.clone(),
    )
    .with_namespace(namespace);

    tracing::info!("Wallet system initialized");

    WalletService::new(registry, directory, ledger, lookup, notifications)
}
