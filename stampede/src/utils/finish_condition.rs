use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use tokio::time::{Duration, Instant};

/// Shared run-termination discipline. Every worker gates each request cycle
/// on `try_claim`; this is the only coordination point between workers.
#[derive(Debug)]
pub enum FinishCondition {
    /// Run until the wall-clock deadline passes. The deadline is computed
    /// once and read-only afterwards.
    Deadline { deadline: Instant },
    /// Run until the pre-loaded token pool is drained. Each token stands
    /// for one request to perform.
    Tokens { total: u64, left: AtomicI64 },
}

impl FinishCondition {
    pub fn until_deadline(duration: Duration) -> Arc<Self> {
        Arc::new(FinishCondition::Deadline {
            deadline: Instant::now() + duration,
        })
    }

    pub fn until_drained(total: u64) -> Arc<Self> {
        Arc::new(FinishCondition::Tokens {
            total,
            left: AtomicI64::new(total as i64),
        })
    }

    /// Claims the right to perform one more request cycle. Never blocks.
    ///
    /// In token mode the pool is decremented atomically, so across all
    /// workers exactly `total` claims succeed; a request already in flight
    /// when the deadline passes is unaffected, the check happens only at
    /// loop top.
    pub fn try_claim(&self) -> bool {
        match self {
            FinishCondition::Deadline { deadline } => Instant::now() < *deadline,
            FinishCondition::Tokens { left, .. } => left.fetch_sub(1, Ordering::AcqRel) > 0,
        }
    }

    pub fn total(&self) -> Option<u64> {
        match self {
            FinishCondition::Deadline { .. } => None,
            FinishCondition::Tokens { total, .. } => Some(*total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_tokens_are_claimed_exactly_once() {
        let condition = FinishCondition::until_drained(1000);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let condition = condition.clone();
            handles.push(thread::spawn(move || {
                let mut claimed = 0u64;
                while condition.try_claim() {
                    claimed += 1;
                }
                claimed
            }));
        }
        let total: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn test_drained_pool_rejects_further_claims() {
        let condition = FinishCondition::until_drained(1);
        assert!(condition.try_claim());
        assert!(!condition.try_claim());
        assert!(!condition.try_claim());
    }

    #[test]
    fn test_elapsed_deadline_rejects_claims() {
        let condition = FinishCondition::until_deadline(Duration::from_secs(0));
        assert!(!condition.try_claim());
    }

    #[test]
    fn test_future_deadline_accepts_claims() {
        let condition = FinishCondition::until_deadline(Duration::from_secs(60));
        assert!(condition.try_claim());
        assert_eq!(condition.total(), None);
    }
}
