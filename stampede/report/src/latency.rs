use crate::percentile::percentile;
use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// Latency distribution of all successful request cycles, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyMetrics {
    #[serde(serialize_with = "round_float")]
    pub p50_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p90_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p95_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub p99_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub min_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub max_ms: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_ms: f64,
}

impl LatencyMetrics {
    /// Builds the summary from an ascending-sorted latency sequence.
    /// Returns `None` when no successful request was recorded.
    pub fn from_sorted(sorted_latencies_ms: &[f64]) -> Option<Self> {
        if sorted_latencies_ms.is_empty() {
            return None;
        }

        let avg_ms =
            sorted_latencies_ms.iter().sum::<f64>() / sorted_latencies_ms.len() as f64;

        Some(LatencyMetrics {
            p50_ms: percentile(sorted_latencies_ms, 50.0),
            p90_ms: percentile(sorted_latencies_ms, 90.0),
            p95_ms: percentile(sorted_latencies_ms, 95.0),
            p99_ms: percentile(sorted_latencies_ms, 99.0),
            min_ms: sorted_latencies_ms[0],
            max_ms: sorted_latencies_ms[sorted_latencies_ms.len() - 1],
            avg_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_metrics() {
        assert_eq!(LatencyMetrics::from_sorted(&[]), None);
    }

    #[test]
    fn test_min_max_avg() {
        let metrics = LatencyMetrics::from_sorted(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(metrics.min_ms, 1.0);
        assert_eq!(metrics.max_ms, 4.0);
        assert_eq!(metrics.avg_ms, 2.5);
        assert_eq!(metrics.p50_ms, 2.5);
    }
}
