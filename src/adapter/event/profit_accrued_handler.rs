use crate::{
    domain::{AccountState, ProfitAccrued},
    port::EventHandler,
};

impl EventHandler for ProfitAccrued {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let mut next = state.clone();
        next.profit_amount = state.profit_amount + self.amount;
        next.last_activity = chrono::Utc::now();
        Some(next.recompute_total())
    }
}
