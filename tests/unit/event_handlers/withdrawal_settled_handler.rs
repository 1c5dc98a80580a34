use uuid::Uuid;
use vault::domain::*;
use vault::port::EventHandler;

fn state(deposit: f64, profit: f64) -> AccountState {
    let mut s = AccountState::new(chrono::Utc::now());
    s.review = ReviewStatus::Approved;
    s.deposit_amount = deposit;
    s.profit_amount = profit;
    s.recompute_total()
}

fn settled(amount: f64, decision: ReviewDecision) -> WithdrawalSettled {
    WithdrawalSettled {
        account_id: Uuid::new_v4(),
        withdrawal_id: Uuid::new_v4(),
        amount,
        platform: Platform::Other,
        decision,
        admin_notes: String::new(),
    }
}

#[test]
fn test_approval_debits_deposit_first() {
    let next = settled(30.0, ReviewDecision::Approve)
        .apply(&state(100.0, 10.0))
        .unwrap();

    assert_eq!(next.deposit_amount, 70.0);
    assert_eq!(next.profit_amount, 10.0);
    assert_eq!(next.total_amount, 80.0);
}

#[test]
fn test_approval_overflows_into_profit() {
    let next = settled(105.0, ReviewDecision::Approve)
        .apply(&state(100.0, 10.0))
        .unwrap();

    assert_eq!(next.deposit_amount, 0.0);
    assert_eq!(next.profit_amount, 5.0);
    assert_eq!(next.total_amount, 5.0);
}

#[test]
fn test_approval_beyond_total_cannot_apply() {
    let result = settled(120.0, ReviewDecision::Approve).apply(&state(100.0, 10.0));
    assert!(result.is_none());
}

#[test]
fn test_rejection_changes_nothing() {
    let next = settled(30.0, ReviewDecision::Reject)
        .apply(&state(100.0, 10.0))
        .unwrap();

    assert_eq!(next.deposit_amount, 100.0);
    assert_eq!(next.total_amount, 110.0);
}
