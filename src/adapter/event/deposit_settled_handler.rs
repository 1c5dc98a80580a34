use crate::{
    domain::{AccountState, DepositSettled, ReviewDecision},
    port::EventHandler,
};

impl EventHandler for DepositSettled {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let mut next = state.clone();
        next.last_activity = chrono::Utc::now();

        if self.decision == ReviewDecision::Approve {
            next.deposit_amount = state.deposit_amount + self.amount;
            return Some(next.recompute_total());
        }

        // Rejection settles the record with no balance change.
        Some(next)
    }
}
