//! Retry logic for transient connectivity failures.
//!
//! This module provides [`retry_operation`], a wrapper that executes an
//! async operation against the document store, nudging the client's
//! network link back up and retrying when the failure is classified as a
//! connectivity problem. Non-connectivity errors (permission, validation,
//! logic errors) are returned immediately without retry.
//!
//! # Backoff Strategy
//!
//! Retries use linear backoff: the pause after attempt `n` is
//! `initial_delay * n`, so with the default 1s delay the schedule is
//! 1s, 2s, 3s, …. There is no jitter and no overall deadline; the only
//! bound is the attempt budget.
//!
//! # Connectivity Nudges
//!
//! Before every attempt the loop calls
//! [`ensure_connection`](crate::ensure_connection), and after every
//! backoff pause it calls it again. Both calls are best-effort: a failure
//! to re-enable the network is logged and counted, and the operation is
//! attempted anyway. The service itself is the authority on whether the
//! link is usable.

use std::future::Future;

use coursedesk_storage::{Metrics, StoreError, StoreResult};
use fail::fail_point;

use crate::{
    config::RetryConfig,
    connection::{ConnectionControl, ensure_connection},
};

/// Executes `operation` with connectivity recovery and linear-backoff
/// retry on transient errors.
///
/// Returns the result of the first successful call. A failure that does
/// not classify as a connectivity error propagates immediately; a
/// connectivity failure on the final attempt propagates as-is. The wrapper
/// never substitutes its own error for the operation's: the error the
/// caller sees is always the one the operation last produced.
///
/// # Retry Eligibility
///
/// Only errors where [`StoreError::is_transient`] returns `true` are
/// retried. All other errors are propagated on first occurrence.
///
/// # Metrics
///
/// When `metrics` is provided, every retried attempt increments
/// `retry_count`, an exhausted budget increments `retry_exhausted_count`,
/// and each network nudge updates the reconnect counters.
///
/// # Errors
///
/// Returns the error raised by `operation` on its final (non-retried or
/// exhausted) attempt. Failures of the connectivity nudges are never
/// surfaced here.
#[tracing::instrument(skip(conn, config, metrics, operation), fields(max_attempts = config.max_attempts()))]
pub async fn retry_operation<C, F, Fut, T>(
    conn: &C,
    config: &RetryConfig,
    metrics: Option<&Metrics>,
    operation_name: &str,
    mut operation: F,
) -> StoreResult<T>
where
    C: ConnectionControl + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = StoreResult<T>>,
{
    let mut last_error: Option<StoreError> = None;

    for attempt in 1..=config.max_attempts() {
        nudge_connection(conn, metrics, operation_name, attempt).await;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(
                        operation = operation_name,
                        attempt,
                        "operation succeeded after retry",
                    );
                }
                return Ok(value);
            },
            Err(err) if err.is_transient() && attempt < config.max_attempts() => {
                if let Some(m) = metrics {
                    m.record_retry();
                }
                let delay = config.initial_delay().saturating_mul(attempt);
                tracing::debug!(
                    operation = operation_name,
                    attempt,
                    max_attempts = config.max_attempts(),
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient error, retrying after backoff",
                );
                fail_point!("retry-before-sleep");
                last_error = Some(err);
                tokio::time::sleep(delay).await;
                nudge_connection(conn, metrics, operation_name, attempt).await;
            },
            Err(err) => {
                // Non-transient error on any attempt, or transient on the
                // last attempt
                if attempt > 1
                    && err.is_transient()
                    && let Some(m) = metrics
                {
                    m.record_retry_exhausted();
                }
                return Err(err);
            },
        }
    }

    // All attempts consumed without an explicit return — return the last
    // transient error
    if let Some(m) = metrics {
        m.record_retry_exhausted();
    }
    Err(last_error
        .unwrap_or_else(|| StoreError::internal("retry loop completed without result or error")))
}

/// Best-effort network re-enable.
///
/// A failure here is observability-only: logged at `warn` and counted,
/// never propagated to the operation's caller.
async fn nudge_connection<C>(
    conn: &C,
    metrics: Option<&Metrics>,
    operation_name: &str,
    attempt: u32,
) where
    C: ConnectionControl + ?Sized,
{
    if let Some(m) = metrics {
        m.record_reconnect();
    }

    if let Err(err) = ensure_connection(conn).await {
        if let Some(m) = metrics {
            m.record_reconnect_failure();
        }
        tracing::warn!(
            operation = operation_name,
            attempt,
            error = %err,
            "failed to re-enable network access, attempting operation anyway",
        );
    }
}
