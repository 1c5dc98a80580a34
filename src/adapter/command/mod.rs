mod accrue_profit_handler;
mod adjust_balance_handler;
mod request_deposit_handler;
mod request_withdrawal_handler;
mod review_account_handler;
mod set_blocked_handler;
mod settle_deposit_handler;
mod settle_withdrawal_handler;

pub use accrue_profit_handler::AccrualDraft;
pub use request_deposit_handler::DepositDraft;
