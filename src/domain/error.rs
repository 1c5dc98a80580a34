use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TransactionError {
    #[error("Invalid amount (must be positive)")]
    InvalidAmount,
    #[error("Insufficient balance")]
    InsufficientFunds,
    #[error("Account is blocked")]
    AccountBlocked,
    #[error("Record not found")]
    NotFound,
    #[error("Record is not in the expected status")]
    StateConflict,
    #[error("Account is not eligible for profit accrual")]
    NotEligible,
    #[error("Profit already accrued for this day")]
    AlreadyAccrued,
    #[error("An account with this email already exists")]
    DuplicateEmail,
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum EngineError {
    #[error("Loading resources error: {0}")]
    LoadingResourcesError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Persistence error: {0}")]
    PersistenceError(String),
    #[error("Effecting command error: {0}")]
    SideEffectError(String),
    #[error("No events produced by command handler")]
    NoEvents,
    #[error("State transition failed - event could not be applied")]
    StateTransitionFailed,
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum WalletError {
    Engine(EngineError),
    Transaction(TransactionError),
}

impl Display for WalletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::Engine(e) => e.fmt(f),
            WalletError::Transaction(e) => e.fmt(f),
        }
    }
}

impl WalletError {
    /// Outcomes the daily sweep treats as a skip rather than a failure:
    /// the account is simply not due any profit right now.
    pub fn is_accrual_skip(&self) -> bool {
        matches!(
            self,
            WalletError::Transaction(TransactionError::NotEligible)
                | WalletError::Transaction(TransactionError::AlreadyAccrued)
        )
    }
}
