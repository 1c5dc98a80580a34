use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use vault::adapter::{InMemoryLedger, InMemoryMediaHost};
use vault::domain::*;
use vault::port::{CommandHandler, CommandServices, LedgerIndex};

fn mock_services() -> (Arc<InMemoryLedger>, CommandServices) {
    let ledger = Arc::new(InMemoryLedger::new());
    let services = CommandServices {
        lookup: ledger.clone(),
        media: Arc::new(InMemoryMediaHost::new()),
    };
    (ledger, services)
}

fn active_state(deposit: f64) -> AccountState {
    let mut state = AccountState::new(Utc::now());
    state.review = ReviewStatus::Approved;
    state.deposit_amount = deposit;
    state.recompute_total()
}

#[tokio::test]
async fn test_accrual_computes_flat_rate_profit() {
    let account_id = Uuid::new_v4();
    let cmd = AccrueProfit { account_id };
    let state = active_state(1000.0);
    let (_ledger, services) = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    let profit = cmd.validate(&state, &resource).unwrap();
    assert_eq!(profit, 10.0);

    let events = cmd
        .emit(&state, &profit, &resource, Utc::now())
        .unwrap();
    assert_eq!(events.len(), 1);
    match &events[0] {
        WalletEvent::ProfitAccrued(e) => {
            assert_eq!(e.amount, 10.0);
            assert_eq!(e.deposit_amount, 1000.0);
            assert_eq!(e.rate, DAILY_PROFIT_RATE);
            assert_eq!(e.day, Utc::now().date_naive());
        }
        _ => panic!("Expected ProfitAccrued event"),
    }
}

#[tokio::test]
async fn test_accrual_rejects_zero_deposit() {
    let cmd = AccrueProfit {
        account_id: Uuid::new_v4(),
    };
    let state = active_state(0.0);
    let (_ledger, services) = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert!(matches!(
        cmd.validate(&state, &resource),
        Err(WalletError::Transaction(TransactionError::NotEligible))
    ));
}

#[tokio::test]
async fn test_accrual_rejects_blocked_account() {
    let cmd = AccrueProfit {
        account_id: Uuid::new_v4(),
    };
    let mut state = active_state(500.0);
    state.status = AccountStatus::Blocked;
    let (_ledger, services) = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert!(matches!(
        cmd.validate(&state, &resource),
        Err(WalletError::Transaction(TransactionError::NotEligible))
    ));
}

#[tokio::test]
async fn test_accrual_rejects_same_day_duplicate() {
    let account_id = Uuid::new_v4();
    let cmd = AccrueProfit { account_id };
    let state = active_state(500.0);
    let (ledger, services) = mock_services();

    // Today's entry already exists in the ledger
    ledger
        .insert_profit(ProfitRecord {
            id: Uuid::new_v4(),
            account_id,
            amount: 5.0,
            deposit_amount: 500.0,
            rate: DAILY_PROFIT_RATE,
            day: Utc::now().date_naive(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert!(resource.already_accrued);
    assert!(matches!(
        cmd.validate(&state, &resource),
        Err(WalletError::Transaction(TransactionError::AlreadyAccrued))
    ));
}
