use crate::{
    domain::{AccountState, BalanceAdjusted},
    port::EventHandler,
};

impl EventHandler for BalanceAdjusted {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        if self.new_balance < 0.0 {
            return None;
        }

        let mut next = state.clone();
        next.deposit_amount = self.new_balance;
        next.last_activity = chrono::Utc::now();
        Some(next.recompute_total())
    }
}
