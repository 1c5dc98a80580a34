use crate::{
    domain::{AccountReviewed, AccountState, ReviewDecision, ReviewStatus},
    port::EventHandler,
};

impl EventHandler for AccountReviewed {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        // A review verdict only lands on an account still awaiting one.
        if state.review != ReviewStatus::Pending {
            return None;
        }

        let mut next = state.clone();
        next.review = match self.decision {
            ReviewDecision::Approve => ReviewStatus::Approved,
            ReviewDecision::Reject => ReviewStatus::Rejected,
        };
        next.last_activity = chrono::Utc::now();
        Some(next)
    }
}
