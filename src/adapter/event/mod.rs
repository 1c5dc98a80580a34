mod account_reviewed_handler;
mod balance_adjusted_handler;
mod block_changed_handler;
mod deposit_requested_handler;
mod deposit_settled_handler;
mod profit_accrued_handler;
mod withdrawal_requested_handler;
mod withdrawal_settled_handler;

use crate::domain::{AccountState, WalletEvent};
use crate::{domain::EventEnvelope, port::EventHandler};

impl EventHandler for EventEnvelope {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        match &self.event {
            WalletEvent::DepositRequested(event) => event.apply(state),
            WalletEvent::DepositSettled(event) => event.apply(state),
            WalletEvent::WithdrawalRequested(event) => event.apply(state),
            WalletEvent::WithdrawalSettled(event) => event.apply(state),
            WalletEvent::ProfitAccrued(event) => event.apply(state),
            WalletEvent::BalanceAdjusted(event) => event.apply(state),
            WalletEvent::BlockChanged(event) => event.apply(state),
            WalletEvent::AccountReviewed(event) => event.apply(state),
        }
    }
}
