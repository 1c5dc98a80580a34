use crate::{
    domain::{
        AccountState, AccountStatus, AccrueProfit, ProfitAccrued, ProfitId, TransactionError,
        WalletError, WalletEvent, DAILY_PROFIT_RATE,
    },
    port::{CommandHandler, CommandServices},
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Accrual context resolved during the load phase: the UTC day the credit
/// lands on and whether that day already has a profit entry.
#[derive(Debug, Clone)]
pub struct AccrualDraft {
    pub profit_id: ProfitId,
    pub day: NaiveDate,
    pub already_accrued: bool,
}

#[async_trait]
impl CommandHandler for AccrueProfit {
    type Resource = AccrualDraft;
    type Entity = f64;

    async fn load(
        &self,
        _stale_state: &AccountState,
        services: &CommandServices,
    ) -> Result<Self::Resource, WalletError> {
        let day = Utc::now().date_naive();
        let already_accrued = services
            .lookup
            .profit_accrued_on(self.account_id, day)
            .await?;

        Ok(AccrualDraft {
            profit_id: Uuid::new_v4(),
            day,
            already_accrued,
        })
    }

    fn validate(
        &self,
        state: &AccountState,
        resource: &Self::Resource,
    ) -> Result<Self::Entity, WalletError> {
        if state.status != AccountStatus::Active || state.deposit_amount <= 0.0 {
            return Err(WalletError::Transaction(TransactionError::NotEligible));
        }

        if resource.already_accrued {
            return Err(WalletError::Transaction(TransactionError::AlreadyAccrued));
        }

        Ok(state.deposit_amount * DAILY_PROFIT_RATE)
    }

    fn emit(
        &self,
        state: &AccountState,
        entity: &Self::Entity,
        resource: &Self::Resource,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<WalletEvent>, WalletError> {
        Ok(vec![WalletEvent::ProfitAccrued(ProfitAccrued {
            account_id: self.account_id,
            profit_id: resource.profit_id,
            amount: *entity,
            deposit_amount: state.deposit_amount,
            rate: DAILY_PROFIT_RATE,
            day: resource.day,
        })])
    }

    async fn effect(
        &self,
        _previous_state: &AccountState,
        state: &AccountState,
        _resource: &Self::Resource,
        entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<(), WalletError> {
        tracing::info!(
            account = %self.account_id,
            amount = %format!("{:.2}", entity),
            new_total = %format!("{:.2}", state.total_amount),
            "daily profit credited"
        );
        Ok(())
    }
}
