use colored::Colorize;
use human_repr::HumanCount;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::report::LoadReport;

impl LoadReport {
    /// Renders the run outcome as a human-readable block on stdout.
    pub fn print_summary(&self) {
        println!();
        let params_line = format!(
            "Load test: {} {}, concurrency: {}, {}, timeout: {:.1} s{}",
            self.params.method,
            self.params.url,
            self.params.concurrency,
            self.params.mode,
            self.params.timeout_secs,
            if self.params.keep_alive {
                ""
            } else {
                ", keep-alive off"
            },
        )
        .blue();
        println!("{params_line}");

        let completion_line = format!(
            "Completed: {} in {:.3} s (ok: {}, 2xx-3xx: {}, errors: {}), {:.1} requests/s",
            self.total_done.human_count_bare(),
            self.elapsed_secs,
            self.total_completed,
            self.ok_statuses,
            self.total_errored,
            self.requests_per_second,
        )
        .green();
        println!("{completion_line}");

        println!(
            "{}",
            format!("Statuses: {}", format_histogram(&self.statuses)).green()
        );

        if !self.errors.is_empty() {
            println!(
                "{}",
                format!("Errors: {}", format_histogram(&self.errors)).red()
            );
        }

        match &self.latency {
            Some(latency) => {
                let latency_line = format!(
                    "Latency (ms): p50: {:.2}, p90: {:.2}, p95: {:.2}, p99: {:.2}, \
                     min: {:.2}, max: {:.2}, avg: {:.2}",
                    latency.p50_ms,
                    latency.p90_ms,
                    latency.p95_ms,
                    latency.p99_ms,
                    latency.min_ms,
                    latency.max_ms,
                    latency.avg_ms,
                )
                .green();
                println!("{latency_line}");
            }
            None => println!(
                "{}",
                "No successful responses recorded (all requests timed out or errored).".yellow()
            ),
        }
    }
}

fn format_histogram<K: Display>(histogram: &BTreeMap<K, u64>) -> String {
    if histogram.is_empty() {
        return "none".to_owned();
    }
    histogram
        .iter()
        .map(|(key, count)| format!("{key}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}
