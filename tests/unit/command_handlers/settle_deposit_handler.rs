use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use vault::adapter::{InMemoryLedger, InMemoryMediaHost};
use vault::domain::*;
use vault::port::{CommandHandler, CommandServices, LedgerIndex};

async fn services_with_deposit(
    account_id: AccountId,
    status: Settlement,
) -> (DepositId, CommandServices) {
    let ledger = Arc::new(InMemoryLedger::new());
    let deposit_id = Uuid::new_v4();
    ledger
        .insert_deposit(DepositRecord {
            id: deposit_id,
            account_id,
            amount: 100.0,
            proof_url: "https://media.local/x".to_string(),
            status,
            admin_notes: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .await
        .unwrap();

    (
        deposit_id,
        CommandServices {
            lookup: ledger,
            media: Arc::new(InMemoryMediaHost::new()),
        },
    )
}

fn approved_state() -> AccountState {
    let mut state = AccountState::new(Utc::now());
    state.review = ReviewStatus::Approved;
    state
}

#[tokio::test]
async fn test_settle_loads_the_pending_record() {
    let account_id = Uuid::new_v4();
    let (deposit_id, services) = services_with_deposit(account_id, Settlement::Pending).await;
    let cmd = SettleDeposit {
        account_id,
        deposit_id,
        decision: ReviewDecision::Approve,
        admin_notes: "looks good".to_string(),
    };
    let state = approved_state();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert_eq!(resource.amount, 100.0);

    cmd.validate(&state, &resource).unwrap();
    let events = cmd.emit(&state, &(), &resource, Utc::now()).unwrap();
    match &events[0] {
        WalletEvent::DepositSettled(e) => {
            assert_eq!(e.amount, 100.0);
            assert_eq!(e.decision, ReviewDecision::Approve);
        }
        _ => panic!("Expected DepositSettled event"),
    }
}

#[tokio::test]
async fn test_settle_missing_record_is_not_found() {
    let account_id = Uuid::new_v4();
    let (_deposit_id, services) = services_with_deposit(account_id, Settlement::Pending).await;
    let cmd = SettleDeposit {
        account_id,
        deposit_id: Uuid::new_v4(),
        decision: ReviewDecision::Approve,
        admin_notes: String::new(),
    };

    let result = cmd.load(&approved_state(), &services).await;
    assert!(matches!(
        result,
        Err(WalletError::Transaction(TransactionError::NotFound))
    ));
}

#[tokio::test]
async fn test_settle_terminal_record_is_a_conflict() {
    let account_id = Uuid::new_v4();
    let (deposit_id, services) = services_with_deposit(account_id, Settlement::Approved).await;
    let cmd = SettleDeposit {
        account_id,
        deposit_id,
        decision: ReviewDecision::Reject,
        admin_notes: String::new(),
    };
    let state = approved_state();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert!(matches!(
        cmd.validate(&state, &resource),
        Err(WalletError::Transaction(TransactionError::StateConflict))
    ));
}

#[tokio::test]
async fn test_settle_foreign_record_is_not_found() {
    let owner = Uuid::new_v4();
    let (deposit_id, services) = services_with_deposit(owner, Settlement::Pending).await;

    // Routed to the wrong account
    let cmd = SettleDeposit {
        account_id: Uuid::new_v4(),
        deposit_id,
        decision: ReviewDecision::Approve,
        admin_notes: String::new(),
    };
    let state = approved_state();

    let resource = cmd.load(&state, &services).await.unwrap();
    assert!(matches!(
        cmd.validate(&state, &resource),
        Err(WalletError::Transaction(TransactionError::NotFound))
    ));
}
