use std::sync::Arc;

use uuid::Uuid;
use vault::adapter::{InMemoryLedger, InMemoryMediaHost};
use vault::domain::*;
use vault::port::{CommandHandler, CommandServices};

fn mock_services() -> CommandServices {
    let ledger = Arc::new(InMemoryLedger::new());
    CommandServices {
        lookup: ledger,
        media: Arc::new(InMemoryMediaHost::new()),
    }
}

fn funded_state(deposit: f64, profit: f64) -> AccountState {
    let mut state = AccountState::new(chrono::Utc::now());
    state.review = ReviewStatus::Approved;
    state.deposit_amount = deposit;
    state.profit_amount = profit;
    state.recompute_total()
}

fn withdrawal(amount: f64) -> RequestWithdrawal {
    RequestWithdrawal {
        account_id: Uuid::new_v4(),
        amount,
        platform: Platform::TrustWallet,
        wallet_address: "tw-addr".to_string(),
    }
}

#[tokio::test]
async fn test_withdrawal_validates_sufficient_funds() {
    let cmd = withdrawal(150.0);
    let state = funded_state(100.0, 0.0);
    let services = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    let result = cmd.validate(&state, &resource);
    assert!(
        result.is_err(),
        "Should reject withdrawal with insufficient funds"
    );
}

#[tokio::test]
async fn test_withdrawal_allows_exact_balance() {
    let cmd = withdrawal(100.0);
    let state = funded_state(60.0, 40.0);
    let services = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    let entity = cmd.validate(&state, &resource).unwrap();
    let events = cmd
        .emit(&state, &entity, &resource, chrono::Utc::now())
        .unwrap();

    assert_eq!(events.len(), 1);
    match &events[0] {
        WalletEvent::WithdrawalRequested(w) => {
            assert_eq!(w.amount, 100.0);
            assert_eq!(w.withdrawal_id, resource);
        }
        _ => panic!("Expected WithdrawalRequested event"),
    }
}

#[tokio::test]
async fn test_withdrawal_rejects_negative_amount() {
    let cmd = withdrawal(-50.0);
    let state = funded_state(100.0, 0.0);
    let services = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    let result = cmd.validate(&state, &resource);
    assert!(result.is_err(), "Should reject negative amount");
}

#[tokio::test]
async fn test_withdrawal_rejects_blocked_account() {
    let cmd = withdrawal(10.0);
    let mut state = funded_state(100.0, 0.0);
    state.status = AccountStatus::Blocked;
    let services = mock_services();

    let resource = cmd.load(&state, &services).await.unwrap();
    let result = cmd.validate(&state, &resource);
    assert!(matches!(
        result,
        Err(WalletError::Transaction(TransactionError::AccountBlocked))
    ));
}
