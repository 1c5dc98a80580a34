use chrono::Utc;

use crate::adapter::AccountRegistry;
use crate::domain::{AccrueProfit, CommandMetadata, DeduplicationKey, WalletCommand};
use crate::port::AccountDirectory;

/// Tally of one sweep over the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Accounts that received today's profit
    pub credited: usize,
    /// Accounts that were not eligible or had already been credited today
    pub skipped: usize,
    /// Accounts where the accrual failed for another reason
    pub failed: usize,
}

/// Walk every registered account once and credit the daily profit where due.
///
/// Per-account failures are logged and do not stop the batch; there is no
/// retry. Each account's mutation goes through its actor, so a sweep racing
/// a concurrent withdrawal approval cannot lose either update.
pub async fn run_sweep(
    registry: &AccountRegistry,
    directory: &dyn AccountDirectory,
) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    let account_ids = match directory.account_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Error in daily profit calculation: {}", e);
            return outcome;
        }
    };

    let day = Utc::now().date_naive();
    tracing::info!(
        "Starting daily profit calculation for {} accounts",
        account_ids.len()
    );

    for account_id in account_ids {
        let metadata = CommandMetadata {
            deduplication_key: DeduplicationKey::new(format!("sweep:{}:{}", day, account_id)),
        };

        let command = WalletCommand::AccrueProfit(AccrueProfit { account_id });
        match registry.process_command(account_id, command, metadata).await {
            Ok(_) => outcome.credited += 1,
            Err(e) if e.is_accrual_skip() => {
                tracing::debug!(account = %account_id, "skipping accrual: {}", e);
                outcome.skipped += 1;
            }
            Err(e) => {
                tracing::error!(
                    "Error calculating profit for account {}: {}",
                    account_id,
                    e
                );
                outcome.failed += 1;
            }
        }
    }

    tracing::info!(
        "Daily profit calculation completed: {} credited, {} skipped, {} failed",
        outcome.credited,
        outcome.skipped,
        outcome.failed
    );

    outcome
}
