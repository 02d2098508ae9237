use crate::analytics::worker_stats::WorkerStats;
use chrono::Utc;
use stampede_report::{LatencyMetrics, LoadParams, LoadReport};
use std::time::Duration;
use uuid::Uuid;

pub struct LoadReportBuilder;

impl LoadReportBuilder {
    /// Merges all worker tallies into one report. The merge is
    /// order-independent; the concatenated latency sequence is sorted once
    /// before the percentile summary is computed. A run where every request
    /// failed still produces a valid report with an empty latency section.
    pub fn build(
        params: LoadParams,
        elapsed: Duration,
        worker_stats: Vec<WorkerStats>,
    ) -> LoadReport {
        let merged = worker_stats
            .into_iter()
            .fold(WorkerStats::default(), WorkerStats::merge);

        let total_completed = merged.completed;
        let total_errored = merged.errored();
        let total_done = total_completed + total_errored;
        let ok_statuses: u64 = merged.statuses.range(200..400).map(|(_, count)| count).sum();

        let elapsed_secs = elapsed.as_secs_f64();
        let requests_per_second = if elapsed_secs <= 0.0 {
            f64::INFINITY
        } else {
            total_done as f64 / elapsed_secs
        };

        let mut latencies_ms = merged.latencies_ms;
        latencies_ms.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let latency = LatencyMetrics::from_sorted(&latencies_ms);

        LoadReport {
            uuid: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            params,
            elapsed_secs,
            total_completed,
            total_errored,
            total_done,
            ok_statuses,
            requests_per_second,
            statuses: merged.statuses,
            errors: merged.errors,
            latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stampede_report::{DispatchMode, ErrorKind};

    fn params() -> LoadParams {
        LoadParams {
            url: "http://localhost:8080/ping".to_owned(),
            method: "GET".to_owned(),
            concurrency: 10,
            mode: DispatchMode::RequestCount { count: 100 },
            timeout_secs: 10.0,
            keep_alive: true,
        }
    }

    #[test]
    fn test_all_failures_still_produce_a_valid_report() {
        let mut stats = WorkerStats::default();
        for _ in 0..20 {
            stats.record_error(ErrorKind::Connect);
        }

        let report = LoadReportBuilder::build(params(), Duration::from_secs(2), vec![stats]);
        assert_eq!(report.total_completed, 0);
        assert_eq!(report.total_errored, 20);
        assert_eq!(report.total_done, 20);
        assert_eq!(report.requests_per_second, 10.0);
        assert_eq!(report.latency, None);
        assert!(report.statuses.is_empty());
    }

    #[test]
    fn test_empty_run_has_zero_rps() {
        let report = LoadReportBuilder::build(params(), Duration::from_secs(1), vec![]);
        assert_eq!(report.total_done, 0);
        assert_eq!(report.requests_per_second, 0.0);
        assert_eq!(report.latency, None);
    }

    #[test]
    fn test_zero_elapsed_yields_infinite_rps() {
        let mut stats = WorkerStats::default();
        stats.record_completed(200, 1.0);

        let report = LoadReportBuilder::build(params(), Duration::ZERO, vec![stats]);
        assert_eq!(report.requests_per_second, f64::INFINITY);
    }

    #[test]
    fn test_mixed_outcomes() {
        // 90 completed with 200, 5 timeouts, 5 connect failures spread over
        // several workers.
        let mut workers = Vec::new();
        for worker in 0..10 {
            let mut stats = WorkerStats::default();
            for cycle in 0..9 {
                stats.record_completed(200, (worker * 9 + cycle) as f64);
            }
            stats.record_error(if worker % 2 == 0 {
                ErrorKind::Timeout
            } else {
                ErrorKind::Connect
            });
            workers.push(stats);
        }

        let report = LoadReportBuilder::build(params(), Duration::from_secs(1), workers);
        assert_eq!(report.total_completed, 90);
        assert_eq!(report.total_errored, 10);
        assert_eq!(report.total_done, 100);
        assert_eq!(report.statuses.get(&200), Some(&90));
        assert_eq!(report.errors.get(&ErrorKind::Timeout), Some(&5));
        assert_eq!(report.errors.get(&ErrorKind::Connect), Some(&5));

        let latency = report.latency.unwrap();
        assert_eq!(latency.min_ms, 0.0);
        assert_eq!(latency.max_ms, 89.0);
    }

    #[test]
    fn test_non_2xx_statuses_count_as_completed_but_not_ok() {
        let mut stats = WorkerStats::default();
        stats.record_completed(200, 1.0);
        stats.record_completed(301, 2.0);
        stats.record_completed(404, 3.0);
        stats.record_completed(500, 4.0);

        let report = LoadReportBuilder::build(params(), Duration::from_secs(1), vec![stats]);
        assert_eq!(report.total_completed, 4);
        assert_eq!(report.ok_statuses, 2);
        // RPS divides by everything done, not by the 2xx-3xx subset.
        assert_eq!(report.requests_per_second, 4.0);
    }
}
