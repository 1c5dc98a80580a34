use crate::domain::*;
use crate::port::{CallbackContext, EventCallback};
use async_trait::async_trait;

/// Callback adapter: projects persisted events into the materialized ledger.
///
/// This bridges EventCallback (engine concern) to LedgerIndex (infrastructure
/// port) so that request records, settlements and profit entries stay in
/// sync with the journal.
pub struct LedgerProjection;

#[async_trait]
impl EventCallback for LedgerProjection {
    async fn on_deposit_requested(
        &self,
        event: &DepositRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        ctx.ledger
            .insert_deposit(DepositRecord {
                id: event.deposit_id,
                account_id: event.account_id,
                amount: event.amount,
                proof_url: event.proof_url.clone(),
                status: Settlement::Pending,
                admin_notes: String::new(),
                created_at: ctx.envelope.timestamp,
                updated_at: ctx.envelope.timestamp,
            })
            .await
    }

    async fn on_deposit_settled(
        &self,
        event: &DepositSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        ctx.ledger
            .settle_deposit(
                event.deposit_id,
                event.decision,
                event.admin_notes.clone(),
                ctx.envelope.timestamp,
            )
            .await
    }

    async fn on_withdrawal_requested(
        &self,
        event: &WithdrawalRequested,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        ctx.ledger
            .insert_withdrawal(WithdrawalRecord {
                id: event.withdrawal_id,
                account_id: event.account_id,
                amount: event.amount,
                platform: event.platform,
                wallet_address: event.wallet_address.clone(),
                status: Settlement::Pending,
                admin_notes: String::new(),
                created_at: ctx.envelope.timestamp,
                updated_at: ctx.envelope.timestamp,
            })
            .await
    }

    async fn on_withdrawal_settled(
        &self,
        event: &WithdrawalSettled,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        ctx.ledger
            .settle_withdrawal(
                event.withdrawal_id,
                event.decision,
                event.admin_notes.clone(),
                ctx.envelope.timestamp,
            )
            .await
    }

    async fn on_profit_accrued(
        &self,
        event: &ProfitAccrued,
        ctx: &CallbackContext,
    ) -> Result<(), WalletError> {
        ctx.ledger
            .insert_profit(ProfitRecord {
                id: event.profit_id,
                account_id: event.account_id,
                amount: event.amount,
                deposit_amount: event.deposit_amount,
                rate: event.rate,
                day: event.day,
                created_at: ctx.envelope.timestamp,
            })
            .await
    }
}
