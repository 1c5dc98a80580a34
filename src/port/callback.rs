use crate::domain::*;
use crate::port::{Journal, LedgerIndex, NotificationStore};
use async_trait::async_trait;
use std::sync::Arc;

/// Context provided to event callbacks
pub struct CallbackContext {
    /// The journal - for infrastructure callbacks that need the log
    pub journal: Arc<dyn Journal>,
    /// The materialized ledger - for projection callbacks
    pub ledger: Arc<dyn LedgerIndex>,
    /// The notification inbox - for notifier callbacks
    pub notifications: Arc<dyn NotificationStore>,
    /// The persisted event envelope (includes sequence number, timestamp, etc.)
    pub envelope: EventEnvelope,
}

/// Infrastructure callbacks invoked after events are persisted
///
/// Implementations can maintain projections, indices, or other
/// infrastructure concerns. These are called by the Engine after successful
/// event persistence, before the effects run.
#[async_trait]
pub trait EventCallback: Send + Sync {
    async fn on_deposit_requested(
        &self,
        event: &DepositRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_deposit_settled(
        &self,
        event: &DepositSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_withdrawal_requested(
        &self,
        event: &WithdrawalRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_withdrawal_settled(
        &self,
        event: &WithdrawalSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_profit_accrued(
        &self,
        event: &ProfitAccrued,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_balance_adjusted(
        &self,
        event: &BalanceAdjusted,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_block_changed(
        &self,
        event: &BlockChanged,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }

    async fn on_account_reviewed(
        &self,
        event: &AccountReviewed,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let _ = (event, ctx);
        Ok(())
    }
}
