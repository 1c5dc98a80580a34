use crate::{
    domain::{AccountState, DepositRequested},
    port::EventHandler,
};

impl EventHandler for DepositRequested {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // Requesting a deposit credits nothing; the pending ledger record is
        // a projection concern. Only the activity timestamp moves.
        let mut next = state.clone();
        next.last_activity = chrono::Utc::now();
        Some(next)
    }
}
