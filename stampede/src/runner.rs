use crate::actors::worker::Worker;
use crate::analytics::report_builder::LoadReportBuilder;
use crate::args::StampedeArgs;
use crate::error::StampedeError;
use crate::http::{build_client, RequestSpec};
use crate::utils::finish_condition::FinishCondition;
use futures::future::join_all;
use futures::FutureExt;
use stampede_report::{DispatchMode, LoadParams, LoadReport};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

/// The dispatch coordinator: builds the shared transport and finish
/// condition, spawns the workers, waits for all of them and hands the
/// collected tallies to the report builder.
pub struct LoadRunner {
    args: StampedeArgs,
}

impl LoadRunner {
    pub fn new(args: StampedeArgs) -> Self {
        LoadRunner { args }
    }

    pub async fn run(&self) -> Result<LoadReport, StampedeError> {
        let params = LoadParams::from(&self.args);
        let spec = Arc::new(RequestSpec::from_args(&self.args)?);
        let client = build_client(self.args.concurrency, self.args.keep_alive())?;
        let finish_condition = match params.mode {
            DispatchMode::Duration { secs } => {
                FinishCondition::until_deadline(Duration::from_secs_f64(secs))
            }
            DispatchMode::RequestCount { count } => FinishCondition::until_drained(count),
        };

        info!(
            "Starting load test: {} {} with {} workers, {}",
            params.method, params.url, params.concurrency, params.mode
        );

        let started = Instant::now();
        let futures = (1..=self.args.concurrency)
            .map(|worker_id| {
                let worker = Worker::new(
                    worker_id,
                    client.clone(),
                    spec.clone(),
                    finish_condition.clone(),
                );
                async move { worker.run().await }.boxed()
            })
            .collect::<Vec<_>>();
        let worker_stats = join_all(futures).await;
        let elapsed = started.elapsed();

        info!("All workers finished");
        Ok(LoadReportBuilder::build(params, elapsed, worker_stats))
    }
}
