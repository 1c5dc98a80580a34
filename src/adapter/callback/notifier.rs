use crate::domain::*;
use crate::port::{CallbackContext, EventCallback};
use async_trait::async_trait;

/// Callback adapter: turns every persisted event into exactly one inbox
/// entry for the owning account.
pub struct Notifier;

impl Notifier {
    async fn push(
        &self,
        ctx: &CallbackContext,
        account_id: AccountId,
        kind: NotificationKind,
        message: String,
        action_url: Option<String>,
    ) -> Result<(), WalletError> {
        let mut notification =
            Notification::new(Some(account_id), kind, message, ctx.envelope.timestamp);
        if let Some(url) = action_url {
            notification = notification.with_action_url(url);
        }
        ctx.notifications.append(notification).await
    }
}

fn with_reason(base: String, notes: &str) -> String {
    if notes.trim().is_empty() {
        base
    } else {
        format!("{} Reason: {}", base, notes)
    }
}

#[async_trait]
impl EventCallback for Notifier {
    async fn on_deposit_requested(
        &self,
        event: &DepositRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        self.push(
            ctx,
            event.account_id,
            NotificationKind::Deposit,
            format!(
                "Your deposit request of ${:.2} has been submitted and is pending review",
                event.amount
            ),
            Some(format!("/admin/deposits/{}", event.deposit_id)),
        )
        .await
    }

    async fn on_deposit_settled(
        &self,
        event: &DepositSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let message = match event.decision {
            ReviewDecision::Approve => format!(
                "Your deposit of ${:.2} has been approved and added to your account",
                event.amount
            ),
            ReviewDecision::Reject => with_reason(
                format!("Your deposit of ${:.2} has been rejected.", event.amount),
                &event.admin_notes,
            ),
        };
        self.push(ctx, event.account_id, NotificationKind::Deposit, message, None)
            .await
    }

    async fn on_withdrawal_requested(
        &self,
        event: &WithdrawalRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        self.push(
            ctx,
            event.account_id,
            NotificationKind::Withdrawal,
            format!(
                "Your withdrawal request of ${:.2} to {} has been submitted and is pending review",
                event.amount, event.platform
            ),
            Some(format!("/admin/withdrawals/{}", event.withdrawal_id)),
        )
        .await
    }

    async fn on_withdrawal_settled(
        &self,
        event: &WithdrawalSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let message = match event.decision {
            ReviewDecision::Approve => format!(
                "Your withdrawal of ${:.2} to {} has been approved",
                event.amount, event.platform
            ),
            ReviewDecision::Reject => with_reason(
                format!(
                    "Your withdrawal of ${:.2} to {} has been rejected.",
                    event.amount, event.platform
                ),
                &event.admin_notes,
            ),
        };
        self.push(
            ctx,
            event.account_id,
            NotificationKind::Withdrawal,
            message,
            None,
        )
        .await
    }

    async fn on_profit_accrued(
        &self,
        event: &ProfitAccrued,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        self.push(
            ctx,
            event.account_id,
            NotificationKind::Profit,
            format!(
                "Daily profit of ${:.2} has been credited to your account",
                event.amount
            ),
            None,
        )
        .await
    }

    async fn on_balance_adjusted(
        &self,
        event: &BalanceAdjusted,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let change = event.new_balance - event.previous_balance;
        let (kind, message) = if change > 0.0 {
            (
                NotificationKind::BalanceIncrease,
                format!(
                    "Your balance has been increased by ${:.2}. Reason: {}",
                    change, event.reason
                ),
            )
        } else if change < 0.0 {
            (
                NotificationKind::BalanceDecrease,
                format!(
                    "Your balance has been decreased by ${:.2}. Reason: {}",
                    change.abs(),
                    event.reason
                ),
            )
        } else {
            (
                NotificationKind::BalanceAdjustment,
                format!("Balance adjustment processed. Reason: {}", event.reason),
            )
        };
        self.push(ctx, event.account_id, kind, message, None).await
    }

    async fn on_block_changed(
        &self,
        event: &BlockChanged,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let message = if event.blocked {
            "Your account has been blocked by admin".to_string()
        } else {
            "Your account has been unblocked by admin".to_string()
        };
        self.push(ctx, event.account_id, NotificationKind::General, message, None)
            .await
    }

    async fn on_account_reviewed(
        &self,
        event: &AccountReviewed,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        let message = match event.decision {
            ReviewDecision::Approve => {
                "Congratulations! Your account has been approved. You can now access all features."
                    .to_string()
            }
            ReviewDecision::Reject => format!(
                "Your account has been rejected. Reason: {}. Please contact support if you have any questions.",
                event.reason.as_deref().unwrap_or("unspecified")
            ),
        };
        self.push(ctx, event.account_id, NotificationKind::General, message, None)
            .await
    }
}
