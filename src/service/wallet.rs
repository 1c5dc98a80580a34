use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapter::AccountRegistry;
use crate::domain::{
    AccountId, AccountProfile, AccrueProfit, AdjustBalance, BalanceSummary, CommandMetadata,
    DeduplicationKey, DepositId, DepositRecord, Inbox, Notification, NotificationId,
    NotificationKind, Page, Paginated, Platform, ProfitRecord, ProofUpload, ReadStatus,
    RequestDeposit, RequestWithdrawal, ReviewAccount, ReviewDecision, Role, SetBlocked,
    SettleDeposit, SettleWithdrawal, Settlement, TransactionError, TransactionKind,
    TransactionView, WalletCommand, WalletError, WithdrawalId, WithdrawalRecord,
};
use crate::port::{AccountDirectory, LedgerIndex, NotificationStore, RequestLookup};

/// Outcome of the manual single-account accrual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualOutcome {
    pub profit_amount: f64,
    pub new_total_amount: f64,
}

/// Aggregates for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_accounts: usize,
    pub approved_deposit_total: f64,
    pub approved_withdrawal_total: f64,
    pub pending_deposits: usize,
    pub pending_withdrawals: usize,
}

/// The application facade: everything the HTTP surface (out of scope here)
/// would call. Mutations are routed through the per-account actor registry;
/// reads go straight to the stores.
#[derive(Clone)]
pub struct WalletService {
    registry: AccountRegistry,
    directory: Arc<dyn AccountDirectory>,
    ledger: Arc<dyn LedgerIndex>,
    lookup: Arc<dyn RequestLookup>,
    notifications: Arc<dyn NotificationStore>,
}

impl WalletService {
    pub fn new(
        registry: AccountRegistry,
        directory: Arc<dyn AccountDirectory>,
        ledger: Arc<dyn LedgerIndex>,
        lookup: Arc<dyn RequestLookup>,
        notifications: Arc<dyn NotificationStore>,
    ) -> Self {
        Self {
            registry,
            directory,
            ledger,
            lookup,
            notifications,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn directory(&self) -> Arc<dyn AccountDirectory> {
        self.directory.clone()
    }

    /// Fresh idempotency key for a one-shot API call.
    fn api_key() -> CommandMetadata {
        CommandMetadata {
            deduplication_key: DeduplicationKey::new(format!("api:{}", Uuid::new_v4())),
        }
    }

    async fn dispatch(
        &self,
        command: WalletCommand,
    ) -> Result<crate::adapter::CommandReceipt, WalletError> {
        let account_id = command.account_id();
        self.ensure_registered(account_id).await?;
        self.registry
            .process_command(account_id, command, Self::api_key())
            .await
    }

    async fn ensure_registered(&self, account_id: AccountId) -> Result<(), WalletError> {
        if self.directory.find(account_id).await?.is_none() {
            return Err(WalletError::Transaction(TransactionError::NotFound));
        }
        Ok(())
    }

    // ---- account lifecycle ----

    pub async fn register_account(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<AccountProfile, WalletError> {
        let profile = AccountProfile {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            role: Role::User,
            created_at: Utc::now(),
        };

        self.directory.register(profile.clone()).await?;
        tracing::info!(account = %profile.id, email = %profile.email, "account registered");
        Ok(profile)
    }

    pub async fn approve_account(&self, account_id: AccountId) -> Result<(), WalletError> {
        self.dispatch(WalletCommand::ReviewAccount(ReviewAccount {
            account_id,
            decision: ReviewDecision::Approve,
            reason: None,
        }))
        .await?;
        Ok(())
    }

    pub async fn reject_account(
        &self,
        account_id: AccountId,
        reason: impl Into<String>,
    ) -> Result<(), WalletError> {
        self.dispatch(WalletCommand::ReviewAccount(ReviewAccount {
            account_id,
            decision: ReviewDecision::Reject,
            reason: Some(reason.into()),
        }))
        .await?;
        Ok(())
    }

    pub async fn block_account(&self, account_id: AccountId) -> Result<(), WalletError> {
        self.dispatch(WalletCommand::SetBlocked(SetBlocked {
            account_id,
            blocked: true,
        }))
        .await?;
        Ok(())
    }

    pub async fn unblock_account(&self, account_id: AccountId) -> Result<(), WalletError> {
        self.dispatch(WalletCommand::SetBlocked(SetBlocked {
            account_id,
            blocked: false,
        }))
        .await?;
        Ok(())
    }

    pub async fn profile(&self, account_id: AccountId) -> Result<AccountProfile, WalletError> {
        self.directory
            .find(account_id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))
    }

    // ---- deposits ----

    pub async fn request_deposit(
        &self,
        account_id: AccountId,
        amount: f64,
        proof: ProofUpload,
    ) -> Result<DepositRecord, WalletError> {
        let receipt = self
            .dispatch(WalletCommand::RequestDeposit(RequestDeposit {
                account_id,
                amount,
                proof,
            }))
            .await?;

        match &receipt.envelope.event {
            crate::domain::WalletEvent::DepositRequested(event) => self
                .lookup
                .find_deposit(event.deposit_id)
                .await?
                .ok_or(WalletError::Transaction(TransactionError::NotFound)),
            _ => Err(WalletError::Transaction(TransactionError::NotFound)),
        }
    }

    pub async fn approve_deposit(
        &self,
        deposit_id: DepositId,
        admin_notes: impl Into<String>,
    ) -> Result<(), WalletError> {
        self.settle_deposit(deposit_id, ReviewDecision::Approve, admin_notes.into())
            .await
    }

    pub async fn reject_deposit(
        &self,
        deposit_id: DepositId,
        admin_notes: impl Into<String>,
    ) -> Result<(), WalletError> {
        self.settle_deposit(deposit_id, ReviewDecision::Reject, admin_notes.into())
            .await
    }

    async fn settle_deposit(
        &self,
        deposit_id: DepositId,
        decision: ReviewDecision,
        admin_notes: String,
    ) -> Result<(), WalletError> {
        let record = self
            .lookup
            .find_deposit(deposit_id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))?;

        self.dispatch(WalletCommand::SettleDeposit(SettleDeposit {
            account_id: record.account_id,
            deposit_id,
            decision,
            admin_notes,
        }))
        .await?;
        Ok(())
    }

    pub async fn deposit(&self, id: DepositId) -> Result<DepositRecord, WalletError> {
        self.lookup
            .find_deposit(id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))
    }

    pub async fn deposit_history(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<DepositRecord>, WalletError> {
        self.ledger.deposits_for(account_id, page).await
    }

    // ---- withdrawals ----

    pub async fn request_withdrawal(
        &self,
        account_id: AccountId,
        amount: f64,
        platform: Platform,
        wallet_address: impl Into<String>,
    ) -> Result<WithdrawalRecord, WalletError> {
        let receipt = self
            .dispatch(WalletCommand::RequestWithdrawal(RequestWithdrawal {
                account_id,
                amount,
                platform,
                wallet_address: wallet_address.into(),
            }))
            .await?;

        match &receipt.envelope.event {
            crate::domain::WalletEvent::WithdrawalRequested(event) => self
                .lookup
                .find_withdrawal(event.withdrawal_id)
                .await?
                .ok_or(WalletError::Transaction(TransactionError::NotFound)),
            _ => Err(WalletError::Transaction(TransactionError::NotFound)),
        }
    }

    pub async fn approve_withdrawal(
        &self,
        withdrawal_id: WithdrawalId,
        admin_notes: impl Into<String>,
    ) -> Result<(), WalletError> {
        self.settle_withdrawal(withdrawal_id, ReviewDecision::Approve, admin_notes.into())
            .await
    }

    pub async fn reject_withdrawal(
        &self,
        withdrawal_id: WithdrawalId,
        admin_notes: impl Into<String>,
    ) -> Result<(), WalletError> {
        self.settle_withdrawal(withdrawal_id, ReviewDecision::Reject, admin_notes.into())
            .await
    }

    async fn settle_withdrawal(
        &self,
        withdrawal_id: WithdrawalId,
        decision: ReviewDecision,
        admin_notes: String,
    ) -> Result<(), WalletError> {
        let record = self
            .lookup
            .find_withdrawal(withdrawal_id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))?;

        self.dispatch(WalletCommand::SettleWithdrawal(SettleWithdrawal {
            account_id: record.account_id,
            withdrawal_id,
            decision,
            admin_notes,
        }))
        .await?;
        Ok(())
    }

    pub async fn withdrawal(&self, id: WithdrawalId) -> Result<WithdrawalRecord, WalletError> {
        self.lookup
            .find_withdrawal(id)
            .await?
            .ok_or(WalletError::Transaction(TransactionError::NotFound))
    }

    pub async fn withdrawal_history(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<WithdrawalRecord>, WalletError> {
        self.ledger.withdrawals_for(account_id, page).await
    }

    // ---- balances and profit ----

    pub async fn balances(&self, account_id: AccountId) -> Result<BalanceSummary, WalletError> {
        self.ensure_registered(account_id).await?;
        let state = self.registry.load_state(account_id).await?;
        Ok(BalanceSummary::from(&state))
    }

    pub async fn adjust_balance(
        &self,
        account_id: AccountId,
        new_balance: f64,
        reason: impl Into<String>,
    ) -> Result<BalanceSummary, WalletError> {
        let receipt = self
            .dispatch(WalletCommand::AdjustBalance(AdjustBalance {
                account_id,
                new_balance,
                reason: reason.into(),
            }))
            .await?;
        Ok(BalanceSummary::from(&receipt.state))
    }

    /// Manual single-account accrual: same contract as the daily sweep,
    /// synchronous, surfaces the ineligibility error instead of skipping.
    pub async fn accrue_profit(
        &self,
        account_id: AccountId,
    ) -> Result<AccrualOutcome, WalletError> {
        let receipt = self
            .dispatch(WalletCommand::AccrueProfit(AccrueProfit { account_id }))
            .await?;

        match &receipt.envelope.event {
            crate::domain::WalletEvent::ProfitAccrued(event) => Ok(AccrualOutcome {
                profit_amount: event.amount,
                new_total_amount: receipt.state.total_amount,
            }),
            _ => Err(WalletError::Transaction(TransactionError::NotEligible)),
        }
    }

    pub async fn profit_history(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<ProfitRecord>, WalletError> {
        self.ledger.profits_for(account_id, page).await
    }

    /// Combined transaction history: deposits, withdrawals and profit
    /// entries merged and sorted newest first.
    pub async fn transactions(
        &self,
        account_id: AccountId,
        page: Page,
    ) -> Result<Paginated<TransactionView>, WalletError> {
        let everything = Page::new(1, usize::MAX);

        let deposits = self.ledger.deposits_for(account_id, everything).await?;
        let withdrawals = self.ledger.withdrawals_for(account_id, everything).await?;
        let profits = self.ledger.profits_for(account_id, everything).await?;

        let mut rows: Vec<TransactionView> = Vec::new();
        rows.extend(deposits.items.into_iter().map(|d| TransactionView {
            id: d.id,
            kind: TransactionKind::Deposit,
            amount: d.amount,
            status: d.status,
            date: d.created_at,
            description: "Deposit".to_string(),
        }));
        rows.extend(withdrawals.items.into_iter().map(|w| TransactionView {
            id: w.id,
            kind: TransactionKind::Withdrawal,
            amount: w.amount,
            status: w.status,
            date: w.created_at,
            description: format!("Withdrawal to {}", w.platform),
        }));
        rows.extend(profits.items.into_iter().map(|p| TransactionView {
            id: p.id,
            kind: TransactionKind::Profit,
            amount: p.amount,
            status: Settlement::Approved,
            date: p.created_at,
            description: "Daily Profit".to_string(),
        }));

        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(Paginated::slice(rows, page))
    }

    pub async fn summary(&self) -> Result<DashboardSummary, WalletError> {
        let ledger = self.ledger.summary().await?;
        Ok(DashboardSummary {
            total_accounts: self.directory.count().await?,
            approved_deposit_total: ledger.approved_deposit_total,
            approved_withdrawal_total: ledger.approved_withdrawal_total,
            pending_deposits: ledger.pending_deposits,
            pending_withdrawals: ledger.pending_withdrawals,
        })
    }

    // ---- notification inbox ----

    /// Admin-sent message to one account's inbox.
    pub async fn send_notification(
        &self,
        account_id: AccountId,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Result<NotificationId, WalletError> {
        self.ensure_registered(account_id).await?;
        let notification =
            Notification::new(Some(account_id), kind, message, Utc::now());
        let id = notification.id;
        self.notifications.append(notification).await?;
        Ok(id)
    }

    pub async fn notifications(
        &self,
        inbox: Inbox,
        status: Option<ReadStatus>,
        page: Page,
    ) -> Result<Paginated<Notification>, WalletError> {
        self.notifications.list(inbox, status, page).await
    }

    pub async fn unread_count(&self, inbox: Inbox) -> Result<usize, WalletError> {
        self.notifications.unread_count(inbox).await
    }

    pub async fn mark_notification_read(
        &self,
        inbox: Inbox,
        id: NotificationId,
    ) -> Result<(), WalletError> {
        self.notifications.mark_read(inbox, id).await
    }

    pub async fn mark_all_notifications_read(&self, inbox: Inbox) -> Result<(), WalletError> {
        self.notifications.mark_all_read(inbox).await
    }

    pub async fn delete_notification(
        &self,
        inbox: Inbox,
        id: NotificationId,
    ) -> Result<(), WalletError> {
        self.notifications.delete(inbox, id).await
    }

    pub async fn clear_notifications(&self, inbox: Inbox) -> Result<(), WalletError> {
        self.notifications.delete_all(inbox).await
    }

    /// Stop every account actor this service has touched.
    pub async fn shutdown(&self) {
        self.registry.shutdown_all().await;
    }
}
