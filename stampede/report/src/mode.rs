use serde::{Deserialize, Serialize};
use std::fmt;

/// How the run decides it is finished: a wall-clock deadline or a fixed
/// total request count drained by the workers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    Duration { secs: f64 },
    RequestCount { count: u64 },
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Duration { secs } => write!(f, "duration: {secs:.2} s"),
            DispatchMode::RequestCount { count } => write!(f, "requests: {count}"),
        }
    }
}
