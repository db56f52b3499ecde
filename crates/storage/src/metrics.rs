//! Retry and reconnect metrics.
//!
//! This module provides lock-free counters for the client layer's retry
//! activity:
//!
//! - Retry attempts and exhausted retry budgets
//! - Network re-enable attempts and failures
//!
//! # Memory Ordering
//!
//! All atomic operations use `Ordering::Relaxed`. Each counter is
//! independent and monotonically increasing, so `Relaxed` guarantees
//! everything required (no torn reads/writes). `snapshot()` reads the
//! counters sequentially and may observe them slightly inconsistent
//! relative to each other, which is acceptable for telemetry. `reset()` is
//! called infrequently and approximate zeroing is fine — an increment
//! racing with a reset may be lost.
//!
//! # Usage
//!
//! ```
//! use coursedesk_storage::Metrics;
//!
//! let metrics = Metrics::new();
//! metrics.record_retry();
//! metrics.record_reconnect();
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.retry_count, 1);
//! assert_eq!(snapshot.reconnect_count, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters for retry and reconnect activity.
///
/// Shared across concurrent callers via `Arc`; all recording methods take
/// `&self` and are safe to call from any task.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Operation attempts that failed transiently and were retried.
    retry_count: AtomicU64,
    /// Retry loops that gave up with the budget consumed.
    retry_exhausted_count: AtomicU64,
    /// Network re-enable attempts issued to the store client.
    reconnect_count: AtomicU64,
    /// Network re-enable attempts that themselves failed.
    reconnect_failure_count: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics instance with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a retry of a transiently failed operation.
    pub fn record_retry(&self) {
        self.retry_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a retry loop that exhausted its attempt budget.
    pub fn record_retry_exhausted(&self) {
        self.retry_exhausted_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a network re-enable attempt.
    pub fn record_reconnect(&self) {
        self.reconnect_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a network re-enable attempt that failed.
    pub fn record_reconnect_failure(&self) {
        self.reconnect_failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            retry_count: self.retry_count.load(Ordering::Relaxed),
            retry_exhausted_count: self.retry_exhausted_count.load(Ordering::Relaxed),
            reconnect_count: self.reconnect_count.load(Ordering::Relaxed),
            reconnect_failure_count: self.reconnect_failure_count.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.retry_count.store(0, Ordering::Relaxed);
        self.retry_exhausted_count.store(0, Ordering::Relaxed);
        self.reconnect_count.store(0, Ordering::Relaxed);
        self.reconnect_failure_count.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time copy of the counters in [`Metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Operation attempts that failed transiently and were retried.
    pub retry_count: u64,
    /// Retry loops that gave up with the budget consumed.
    pub retry_exhausted_count: u64,
    /// Network re-enable attempts issued to the store client.
    pub reconnect_count: u64,
    /// Network re-enable attempts that themselves failed.
    pub reconnect_failure_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = Metrics::new();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_counters_accumulate_independently() {
        let metrics = Metrics::new();

        metrics.record_retry();
        metrics.record_retry();
        metrics.record_retry_exhausted();
        metrics.record_reconnect();
        metrics.record_reconnect();
        metrics.record_reconnect();
        metrics.record_reconnect_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.retry_count, 2);
        assert_eq!(snapshot.retry_exhausted_count, 1);
        assert_eq!(snapshot.reconnect_count, 3);
        assert_eq!(snapshot.reconnect_failure_count, 1);
    }

    #[test]
    fn test_reset_zeroes_all_counters() {
        let metrics = Metrics::new();
        metrics.record_retry();
        metrics.record_reconnect_failure();

        metrics.reset();

        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_concurrent_recording() {
        use std::sync::Arc;

        let metrics = Arc::new(Metrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_retry();
                    }
                })
            })
            .collect();

        for handle in handles {
            drop(handle.join());
        }

        assert_eq!(metrics.snapshot().retry_count, 8000);
    }
}
