use crate::context::*;
use vault::domain::{AccountStatus, Inbox, NotificationKind, Page, TransactionError};
use vault::port::NotificationStore;

#[tokio::test]
async fn test_blocked_account_cannot_request_deposit() {
    let mut ctx = TestContext::new();
    ctx.set_blocked(true).await.unwrap();
    let account_id = ctx.account_id;

    assert_tx_err!(
        ctx.process(deposit(account_id, 100.0)).await,
        TransactionError::AccountBlocked
    );
}

#[tokio::test]
async fn test_blocked_account_cannot_request_withdrawal() {
    let mut ctx = TestContext::new();
    ctx.fund(100.0).await;
    ctx.set_blocked(true).await.unwrap();

    assert_tx_err!(
        ctx.request_withdrawal(10.0).await,
        TransactionError::AccountBlocked
    );
    ctx.assert_balances(100.0, 0.0, 100.0);
}

#[tokio::test]
async fn test_unblock_restores_account() {
    let mut ctx = TestContext::new();
    ctx.set_blocked(true).await.unwrap();
    assert_eq!(ctx.account_state.status, AccountStatus::Blocked);

    ctx.set_blocked(false).await.unwrap();
    assert_eq!(ctx.account_state.status, AccountStatus::Active);

    // Transacting works again
    ctx.fund(50.0).await;
    ctx.assert_balances(50.0, 0.0, 50.0);
}

#[tokio::test]
async fn test_block_notifies_user() {
    let mut ctx = TestContext::new();
    ctx.set_blocked(true).await.unwrap();

    let inbox = Inbox::Account(ctx.account_id);
    let entries = ctx
        .notifications
        .list(inbox, None, Page::default())
        .await
        .unwrap();
    assert_eq!(entries.total_items, 1);
    assert_eq!(entries.items[0].kind, NotificationKind::General);
    assert!(entries.items[0].message.contains("blocked"));
}
