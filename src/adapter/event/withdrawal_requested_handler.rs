use crate::{
    domain::{AccountState, WithdrawalRequested},
    port::EventHandler,
};

impl EventHandler for WithdrawalRequested {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // Funds are not held while the request is pending; the balance only
        // moves on approval.
        let mut next = state.clone();
        next.last_activity = chrono::Utc::now();
        Some(next)
    }
}
