use crate::{
    domain::{AccountState, AccountStatus, BlockChanged},
    port::EventHandler,
};

impl EventHandler for BlockChanged {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let mut next = state.clone();
        next.status = if self.blocked {
            AccountStatus::Blocked
        } else {
            AccountStatus::Active
        };
        next.last_activity = chrono::Utc::now();
        Some(next)
    }
}
