use crate::context::*;
use vault::domain::{Inbox, NotificationKind, Page, TransactionError, WalletError};
use vault::port::NotificationStore;

async fn latest_kind(ctx: &TestContext) -> NotificationKind {
    let inbox = Inbox::Account(ctx.account_id);
    let entries = ctx
        .notifications
        .list(inbox, None, Page::default())
        .await
        .unwrap();
    entries.items[0].kind
}

#[tokio::test]
async fn test_adjustment_up_sets_balance_and_notifies() {
    let mut ctx = TestContext::new();
    ctx.fund(100.0).await;

    ctx.adjust_balance(250.0, "bonus credit").await.unwrap();

    ctx.assert_balances(250.0, 0.0, 250.0);
    assert_eq!(latest_kind(&ctx).await, NotificationKind::BalanceIncrease);
}

#[tokio::test]
async fn test_adjustment_down_sets_balance_and_notifies() {
    let mut ctx = TestContext::new();
    ctx.fund(100.0).await;

    ctx.adjust_balance(40.0, "correction").await.unwrap();

    ctx.assert_balances(40.0, 0.0, 40.0);
    assert_eq!(latest_kind(&ctx).await, NotificationKind::BalanceDecrease);
}

#[tokio::test]
async fn test_adjustment_to_same_value_notifies_neutrally() {
    let mut ctx = TestContext::new();
    ctx.fund(100.0).await;

    ctx.adjust_balance(100.0, "audit touch").await.unwrap();

    ctx.assert_balances(100.0, 0.0, 100.0);
    assert_eq!(latest_kind(&ctx).await, NotificationKind::BalanceAdjustment);
}

#[tokio::test]
async fn test_adjustment_keeps_profit_in_total() {
    let mut ctx = TestContext::new();
    ctx.fund(1000.0).await;
    ctx.accrue().await.unwrap();

    ctx.adjust_balance(500.0, "partial clawback").await.unwrap();

    // Profit survives the override; the total reflects both
    ctx.assert_balances(500.0, 10.0, 510.0);
}

#[tokio::test]
async fn test_adjustment_rejects_negative_balance() {
    let mut ctx = TestContext::new();

    assert_tx_err!(
        ctx.adjust_balance(-1.0, "oops").await,
        TransactionError::InvalidAmount
    );
}

#[tokio::test]
async fn test_adjustment_requires_reason() {
    let mut ctx = TestContext::new();

    let result = ctx.adjust_balance(10.0, "   ").await;
    assert!(matches!(result, Err(WalletError::Engine(_))));
    ctx.assert_balances(0.0, 0.0, 0.0);
}
