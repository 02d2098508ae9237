use stampede_report::ErrorKind;
use std::collections::BTreeMap;

/// Private per-worker tally. Owned exclusively by one worker while the run
/// is in flight and handed over by value when the worker exits.
///
/// `completed == latencies_ms.len()` at all times; every classified outcome
/// increments exactly one of the two histograms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerStats {
    /// One entry per completed cycle, in completion order.
    pub latencies_ms: Vec<f64>,
    pub statuses: BTreeMap<u16, u64>,
    pub errors: BTreeMap<ErrorKind, u64>,
    pub completed: u64,
}

impl WorkerStats {
    pub fn record_completed(&mut self, status: u16, latency_ms: f64) {
        *self.statuses.entry(status).or_insert(0) += 1;
        self.latencies_ms.push(latency_ms);
        self.completed += 1;
    }

    pub fn record_error(&mut self, kind: ErrorKind) {
        *self.errors.entry(kind).or_insert(0) += 1;
    }

    pub fn errored(&self) -> u64 {
        self.errors.values().sum()
    }

    /// Pure merge of two tallies; associative and commutative, so the order
    /// in which worker results are collected does not matter.
    pub fn merge(mut self, other: WorkerStats) -> WorkerStats {
        self.latencies_ms.extend(other.latencies_ms);
        for (status, count) in other.statuses {
            *self.statuses.entry(status).or_insert(0) += count;
        }
        for (kind, count) in other.errors {
            *self.errors.entry(kind).or_insert(0) += count;
        }
        self.completed += other.completed;
        self
    }
}
