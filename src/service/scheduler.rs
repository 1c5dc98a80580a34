use std::sync::Arc;

use chrono::{DateTime, Days, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::adapter::AccountRegistry;
use crate::port::AccountDirectory;
use crate::service::accrual::run_sweep;

/// Answer to the "is the scheduler alive and when does it fire next" query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerStatus {
    pub running: bool,
    pub next_run: DateTime<Utc>,
}

/// The daily profit scheduler: a handle owned by the composition root,
/// started and stopped explicitly. Fires the accrual sweep at every UTC
/// midnight.
pub struct ProfitScheduler {
    handle: JoinHandle<()>,
}

impl ProfitScheduler {
    pub fn start(registry: AccountRegistry, directory: Arc<dyn AccountDirectory>) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                let now = Utc::now();
                let next = next_midnight(now);
                let wait = (next - now).to_std().unwrap_or_default();
                tracing::debug!("next profit calculation at {}", next);
                tokio::time::sleep(wait).await;

                tracing::info!("Starting daily profit calculation...");
                run_sweep(&registry, directory.as_ref()).await;
            }
        });

        tracing::info!("Daily profit calculation job scheduled");
        Self { handle }
    }

    pub fn status(&self) -> SchedulerStatus {
        SchedulerStatus {
            running: !self.handle.is_finished(),
            next_run: next_midnight(Utc::now()),
        }
    }

    /// Abort the timer task. In-flight sweeps are cancelled at the next
    /// await point; per-account mutations already dispatched still finish
    /// inside their actors.
    pub fn stop(self) {
        self.handle.abort();
        tracing::info!("Profit scheduler stopped");
    }
}

/// The next UTC midnight strictly after `now`.
pub fn next_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    (now.date_naive() + Days::new(1))
        .and_time(NaiveTime::MIN)
        .and_utc()
}
