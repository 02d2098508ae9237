use crate::mode::DispatchMode;
use serde::{Deserialize, Serialize};

/// Echo of the configuration a run was started with, embedded in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadParams {
    pub url: String,
    pub method: String,
    pub concurrency: u32,
    pub mode: DispatchMode,
    pub timeout_secs: f64,
    pub keep_alive: bool,
}
