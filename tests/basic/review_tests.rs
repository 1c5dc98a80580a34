use crate::context::*;
use vault::domain::{
    Inbox, Page, ReviewDecision, ReviewStatus, TransactionError, WalletError,
};
use vault::port::NotificationStore;

#[tokio::test]
async fn test_approve_pending_account() {
    let mut ctx = TestContext::new_pending();
    assert_eq!(ctx.account_state.review, ReviewStatus::Pending);

    ctx.review(ReviewDecision::Approve, None).await.unwrap();

    assert_eq!(ctx.account_state.review, ReviewStatus::Approved);

    let inbox = Inbox::Account(ctx.account_id);
    let entries = ctx
        .notifications
        .list(inbox, None, Page::default())
        .await
        .unwrap();
    assert_eq!(entries.total_items, 1);
    assert!(entries.items[0].message.contains("approved"));
}

#[tokio::test]
async fn test_reject_pending_account_requires_reason() {
    let mut ctx = TestContext::new_pending();

    let missing = ctx.review(ReviewDecision::Reject, None).await;
    assert!(matches!(missing, Err(WalletError::Engine(_))));
    assert_eq!(ctx.account_state.review, ReviewStatus::Pending);

    ctx.review(ReviewDecision::Reject, Some("incomplete documents"))
        .await
        .unwrap();
    assert_eq!(ctx.account_state.review, ReviewStatus::Rejected);
}

#[tokio::test]
async fn test_second_review_is_a_conflict() {
    let mut ctx = TestContext::new_pending();
    ctx.review(ReviewDecision::Approve, None).await.unwrap();

    assert_tx_err!(
        ctx.review(ReviewDecision::Reject, Some("changed our mind"))
            .await,
        TransactionError::StateConflict
    );
    assert_eq!(ctx.account_state.review, ReviewStatus::Approved);
}

#[tokio::test]
async fn test_rejection_reason_reaches_the_user() {
    let mut ctx = TestContext::new_pending();
    ctx.review(ReviewDecision::Reject, Some("incomplete documents"))
        .await
        .unwrap();

    let inbox = Inbox::Account(ctx.account_id);
    let entries = ctx
        .notifications
        .list(inbox, None, Page::default())
        .await
        .unwrap();
    assert!(entries.items[0].message.contains("incomplete documents"));
}
