use crate::error_kind::ErrorKind;
use crate::latency::LatencyMetrics;
use crate::params::LoadParams;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use uuid::Uuid;

/// The merged outcome of one load-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Run unique identifier
    pub uuid: Uuid,

    /// Timestamp when the run finished
    pub timestamp: String,

    /// Configuration the run was started with
    pub params: LoadParams,

    /// Wall-clock time of the whole run
    #[serde(serialize_with = "round_float")]
    pub elapsed_secs: f64,

    /// Request cycles that received a response, regardless of status code
    pub total_completed: u64,

    /// Request cycles that failed before a response was fully read
    pub total_errored: u64,

    /// `total_completed + total_errored`
    pub total_done: u64,

    /// Completed cycles with a 2xx or 3xx status. Display-only subset;
    /// feeds neither RPS nor the completion totals.
    pub ok_statuses: u64,

    /// `total_done / elapsed_secs`, `+inf` when elapsed is zero
    #[serde(serialize_with = "round_float")]
    pub requests_per_second: f64,

    /// Status code occurrence counts across all workers
    pub statuses: BTreeMap<u16, u64>,

    /// Error kind occurrence counts across all workers
    pub errors: BTreeMap<ErrorKind, u64>,

    /// Latency distribution, absent when no request completed
    pub latency: Option<LatencyMetrics>,
}

impl LoadReport {
    pub fn dump_to_json(&self, output_dir: &str) {
        std::fs::create_dir_all(output_dir).expect("Failed to create output directory");

        let report_path = Path::new(output_dir).join("report.json");
        let report_json = serde_json::to_string(self).expect("Failed to serialize report");
        std::fs::write(report_path, report_json).expect("Failed to write report to file");
    }
}
