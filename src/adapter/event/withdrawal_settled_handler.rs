use crate::{
    domain::{AccountState, ReviewDecision, WithdrawalSettled},
    port::EventHandler,
};

impl EventHandler for WithdrawalSettled {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let mut next = state.clone();
        next.last_activity = chrono::Utc::now();

        if self.decision == ReviewDecision::Approve {
            if state.total_amount < self.amount {
                return None;
            }

            // Debit the deposit balance first, any remainder comes out of
            // accrued profit. Both stay non-negative under the total check.
            let from_deposit = self.amount.min(state.deposit_amount);
            next.deposit_amount = state.deposit_amount - from_deposit;
            next.profit_amount = state.profit_amount - (self.amount - from_deposit);
            return Some(next.recompute_total());
        }

        Some(next)
    }
}
