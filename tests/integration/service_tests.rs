use uuid::Uuid;
use vault::domain::{
    Inbox, Page, Platform, ProofUpload, ReadStatus, Settlement, TransactionError, WalletError,
};
use vault::service::{boot_with_namespace, run_sweep, WalletService};

async fn service() -> WalletService {
    boot_with_namespace(format!("it-{}", Uuid::new_v4())).await
}

fn proof() -> ProofUpload {
    ProofUpload {
        file_name: "screenshot.png".to_string(),
        bytes: vec![1u8; 32],
    }
}

#[tokio::test]
async fn test_full_wallet_flow() {
    let service = service().await;

    let profile = service
        .register_account("Ada", "Lovelace", "ada@example.com")
        .await
        .unwrap();
    service.approve_account(profile.id).await.unwrap();

    // Deposit and approve
    let deposit = service
        .request_deposit(profile.id, 1000.0, proof())
        .await
        .unwrap();
    assert_eq!(deposit.status, Settlement::Pending);
    service.approve_deposit(deposit.id, "verified").await.unwrap();

    let balances = service.balances(profile.id).await.unwrap();
    assert_eq!(balances.deposit, 1000.0);
    assert_eq!(balances.total, 1000.0);

    // Manual accrual
    let outcome = service.accrue_profit(profile.id).await.unwrap();
    assert_eq!(outcome.profit_amount, 10.0);
    assert_eq!(outcome.new_total_amount, 1010.0);

    // Withdraw and approve
    let withdrawal = service
        .request_withdrawal(profile.id, 200.0, Platform::Binance, "bc1-addr")
        .await
        .unwrap();
    service
        .approve_withdrawal(withdrawal.id, "paid out")
        .await
        .unwrap();

    let balances = service.balances(profile.id).await.unwrap();
    assert_eq!(balances.deposit, 800.0);
    assert_eq!(balances.profit, 10.0);
    assert_eq!(balances.total, 810.0);

    // Combined history: deposit + withdrawal + profit
    let transactions = service
        .transactions(profile.id, Page::default())
        .await
        .unwrap();
    assert_eq!(transactions.total_items, 3);

    // Inbox saw every step
    let unread = service
        .unread_count(Inbox::Account(profile.id))
        .await
        .unwrap();
    assert!(unread >= 4);

    service.shutdown().await;
}

#[tokio::test]
async fn test_registration_rejects_duplicate_email() {
    let service = service().await;

    service
        .register_account("Grace", "Hopper", "grace@example.com")
        .await
        .unwrap();
    let result = service
        .register_account("Grace", "Again", "GRACE@example.com")
        .await;

    assert!(matches!(
        result,
        Err(WalletError::Transaction(TransactionError::DuplicateEmail))
    ));
}

#[tokio::test]
async fn test_operations_on_unknown_account_are_not_found() {
    let service = service().await;

    let ghost = Uuid::new_v4();
    assert!(matches!(
        service.balances(ghost).await,
        Err(WalletError::Transaction(TransactionError::NotFound))
    ));
    assert!(matches!(
        service.accrue_profit(ghost).await,
        Err(WalletError::Transaction(TransactionError::NotFound))
    ));
}

#[tokio::test]
async fn test_sweep_credits_eligible_accounts_only() {
    let service = service().await;

    // Two funded accounts, one empty, one funded-then-blocked
    let mut funded = Vec::new();
    for (i, amount) in [(0, 1000.0), (1, 500.0)] {
        let profile = service
            .register_account("User", "Funded", format!("funded{}@example.com", i))
            .await
            .unwrap();
        service.approve_account(profile.id).await.unwrap();
        let deposit = service
            .request_deposit(profile.id, amount, proof())
            .await
            .unwrap();
        service.approve_deposit(deposit.id, "").await.unwrap();
        funded.push((profile.id, amount));
    }

    let empty = service
        .register_account("User", "Empty", "empty@example.com")
        .await
        .unwrap();
    service.approve_account(empty.id).await.unwrap();

    let blocked = service
        .register_account("User", "Blocked", "blocked@example.com")
        .await
        .unwrap();
    service.approve_account(blocked.id).await.unwrap();
    let deposit = service
        .request_deposit(blocked.id, 800.0, proof())
        .await
        .unwrap();
    service.approve_deposit(deposit.id, "").await.unwrap();
    service.block_account(blocked.id).await.unwrap();

    let outcome = run_sweep(service.registry(), service.directory().as_ref()).await;
    assert_eq!(outcome.credited, 2);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(outcome.failed, 0);

    for (account_id, amount) in &funded {
        let balances = service.balances(*account_id).await.unwrap();
        assert_eq!(balances.profit, amount * 0.01);
        assert_eq!(balances.total, amount + amount * 0.01);
    }

    // Untouched accounts
    assert_eq!(service.balances(empty.id).await.unwrap().total, 0.0);
    assert_eq!(service.balances(blocked.id).await.unwrap().profit, 0.0);

    // Re-running the sweep the same day credits nobody twice
    let again = run_sweep(service.registry(), service.directory().as_ref()).await;
    assert_eq!(again.credited, 0);
    assert_eq!(again.skipped, 4);

    service.shutdown().await;
}

#[tokio::test]
async fn test_manual_accrual_second_call_conflicts() {
    let service = service().await;

    let profile = service
        .register_account("Solo", "Account", "solo@example.com")
        .await
        .unwrap();
    service.approve_account(profile.id).await.unwrap();
    let deposit = service
        .request_deposit(profile.id, 300.0, proof())
        .await
        .unwrap();
    service.approve_deposit(deposit.id, "").await.unwrap();

    service.accrue_profit(profile.id).await.unwrap();
    let second = service.accrue_profit(profile.id).await;
    assert!(matches!(
        second,
        Err(WalletError::Transaction(TransactionError::AlreadyAccrued))
    ));

    service.shutdown().await;
}

#[tokio::test]
async fn test_dashboard_summary_aggregates() {
    let service = service().await;

    let profile = service
        .register_account("Sum", "Mary", "summary@example.com")
        .await
        .unwrap();
    service.approve_account(profile.id).await.unwrap();

    let approved = service
        .request_deposit(profile.id, 400.0, proof())
        .await
        .unwrap();
    service.approve_deposit(approved.id, "").await.unwrap();
    service
        .request_deposit(profile.id, 100.0, proof())
        .await
        .unwrap();

    let withdrawal = service
        .request_withdrawal(profile.id, 50.0, Platform::Other, "addr")
        .await
        .unwrap();
    service.approve_withdrawal(withdrawal.id, "").await.unwrap();

    let summary = service.summary().await.unwrap();
    assert_eq!(summary.total_accounts, 1);
    assert_eq!(summary.approved_deposit_total, 400.0);
    assert_eq!(summary.approved_withdrawal_total, 50.0);
    assert_eq!(summary.pending_deposits, 1);
    assert_eq!(summary.pending_withdrawals, 0);

    service.shutdown().await;
}

#[tokio::test]
async fn test_inbox_flags_via_service() {
    let service = service().await;

    let profile = service
        .register_account("In", "Box", "inbox@example.com")
        .await
        .unwrap();
    service.approve_account(profile.id).await.unwrap();

    let inbox = Inbox::Account(profile.id);
    let entries = service
        .notifications(inbox, Some(ReadStatus::Unread), Page::default())
        .await
        .unwrap();
    assert_eq!(entries.total_items, 1);

    let id = entries.items[0].id;
    service.mark_notification_read(inbox, id).await.unwrap();
    assert_eq!(service.unread_count(inbox).await.unwrap(), 0);

    // Admin side still unread
    assert_eq!(service.unread_count(Inbox::Admin).await.unwrap(), 1);

    service.shutdown().await;
}

#[tokio::test]
async fn test_admin_can_send_a_notification() {
    let service = service().await;

    let profile = service
        .register_account("Dear", "User", "dear@example.com")
        .await
        .unwrap();

    service
        .send_notification(
            profile.id,
            vault::domain::NotificationKind::General,
            "Welcome aboard",
        )
        .await
        .unwrap();

    let inbox = Inbox::Account(profile.id);
    let entries = service
        .notifications(inbox, None, Page::default())
        .await
        .unwrap();
    assert_eq!(entries.total_items, 1);
    assert_eq!(entries.items[0].message, "Welcome aboard");

    // Unknown recipients are refused
    assert!(matches!(
        service
            .send_notification(
                Uuid::new_v4(),
                vault::domain::NotificationKind::General,
                "ghost"
            )
            .await,
        Err(WalletError::Transaction(TransactionError::NotFound))
    ));

    service.shutdown().await;
}
