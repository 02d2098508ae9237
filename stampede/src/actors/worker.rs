use crate::analytics::worker_stats::WorkerStats;
use crate::http::executor::{execute, Outcome};
use crate::http::RequestSpec;
use crate::utils::finish_condition::FinishCondition;
use human_repr::HumanCount;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

/// One concurrency slot. Repeatedly claims a request cycle from the shared
/// finish condition and records every outcome into its private tally.
pub struct Worker {
    id: u32,
    client: Client,
    spec: Arc<RequestSpec>,
    finish_condition: Arc<FinishCondition>,
}

impl Worker {
    pub fn new(
        id: u32,
        client: Client,
        spec: Arc<RequestSpec>,
        finish_condition: Arc<FinishCondition>,
    ) -> Self {
        Worker {
            id,
            client,
            spec,
            finish_condition,
        }
    }

    /// Drives request cycles until the finish condition stops handing out
    /// work. Per-request failures are classified and counted, never
    /// propagated, so a worker always returns its stats. Workers never
    /// wait for each other; a worker that finds the token pool empty exits
    /// immediately.
    pub async fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::default();
        while self.finish_condition.try_claim() {
            match execute(&self.client, &self.spec).await {
                Outcome::Completed { status, latency_ms } => {
                    stats.record_completed(status, latency_ms)
                }
                Outcome::Failed(kind) => stats.record_error(kind),
            }
        }

        info!(
            "Worker #{} → finished: {} completed, {} errored",
            self.id,
            stats.completed.human_count_bare(),
            stats.errored().human_count_bare(),
        );
        stats
    }
}
