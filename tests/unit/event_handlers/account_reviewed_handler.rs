use uuid::Uuid;
use vault::domain::*;
use vault::port::EventHandler;

fn reviewed(decision: ReviewDecision) -> AccountReviewed {
    AccountReviewed {
        account_id: Uuid::new_v4(),
        decision,
        reason: None,
    }
}

#[test]
fn test_approval_moves_pending_to_approved() {
    let state = AccountState::new(chrono::Utc::now());
    let next = reviewed(ReviewDecision::Approve).apply(&state).unwrap();
    assert_eq!(next.review, ReviewStatus::Approved);
}

#[test]
fn test_rejection_moves_pending_to_rejected() {
    let state = AccountState::new(chrono::Utc::now());
    let next = reviewed(ReviewDecision::Reject).apply(&state).unwrap();
    assert_eq!(next.review, ReviewStatus::Rejected);
}

#[test]
fn test_verdict_on_settled_review_cannot_apply() {
    let mut state = AccountState::new(chrono::Utc::now());
    state.review = ReviewStatus::Approved;

    assert!(reviewed(ReviewDecision::Reject).apply(&state).is_none());
}
