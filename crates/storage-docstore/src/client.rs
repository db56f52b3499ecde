//! Retrying document-store client wrapper.
//!
//! [`DocStoreClient`] binds a connection handle, a [`RetryConfig`], and a
//! shared [`Metrics`] instance into the object application code holds. The
//! underlying handle is an explicit constructor dependency rather than a
//! process-wide singleton, which keeps the wrapper independently testable
//! with a fake handle.

use std::{future::Future, sync::Arc};

use coursedesk_storage::{Metrics, MetricsSnapshot, StoreResult};

use crate::{
    config::RetryConfig,
    connection::{ConnectionControl, ensure_connection},
    retry::retry_operation,
};

/// Document-store client with connectivity recovery and bounded retry.
///
/// # Thread Safety
///
/// `DocStoreClient` is `Send + Sync` and cheap to clone; clones share the
/// connection handle and metrics. Concurrent [`run`](Self::run) calls are
/// not serialized — they share the client's process-wide network flag, and
/// redundant enable calls are harmless because enabling is idempotent.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use coursedesk_storage_docstore::{DocStoreClient, RetryConfig};
/// # use async_trait::async_trait;
/// # use coursedesk_storage::StoreResult;
/// # use coursedesk_storage_docstore::ConnectionControl;
/// # struct SdkHandle;
/// # #[async_trait]
/// # impl ConnectionControl for SdkHandle {
/// #     async fn enable_network(&self) -> StoreResult<()> { Ok(()) }
/// # }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DocStoreClient::new(Arc::new(SdkHandle), RetryConfig::default());
///
/// let courses = client.run("list_courses", || async { Ok(vec!["CS101"]) }).await?;
/// assert_eq!(courses, vec!["CS101"]);
/// # Ok(())
/// # }
/// ```
pub struct DocStoreClient<C> {
    /// The underlying SDK connection handle.
    conn: Arc<C>,

    /// Retry policy applied to every operation.
    retry: RetryConfig,

    /// Counters shared across clones of this client.
    metrics: Arc<Metrics>,
}

// Manual impl: a derive would bound `C: Clone`, which SDK handles don't
// provide. Only the `Arc`s and the config are cloned.
impl<C> Clone for DocStoreClient<C> {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            retry: self.retry.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<C> std::fmt::Debug for DocStoreClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocStoreClient").field("retry", &self.retry).finish_non_exhaustive()
    }
}

impl<C: ConnectionControl> DocStoreClient<C> {
    /// Creates a client around an existing connection handle.
    ///
    /// The handle is shared, not owned: pass a clone of the `Arc` that the
    /// rest of the process uses so every consumer toggles the same network
    /// flag.
    #[must_use]
    pub fn new(conn: Arc<C>, retry: RetryConfig) -> Self {
        Self { conn, retry, metrics: Arc::new(Metrics::new()) }
    }

    /// Returns the underlying connection handle.
    #[must_use]
    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// Returns a cloned reference to the underlying connection handle.
    #[must_use]
    pub fn connection_arc(&self) -> Arc<C> {
        Arc::clone(&self.conn)
    }

    /// Returns the retry policy applied to operations.
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Returns a point-in-time copy of the client's retry counters.
    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Re-enables outbound network access for the client.
    ///
    /// Unlike the nudges inside [`run`](Self::run), a failure here is
    /// surfaced: call this when the application wants to know whether the
    /// link could be restored (e.g. on a reconnect button).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connectivity`](coursedesk_storage::StoreError::Connectivity)
    /// when the link cannot be re-established.
    pub async fn ensure_connection(&self) -> StoreResult<()> {
        ensure_connection(self.conn.as_ref()).await
    }

    /// Executes `operation` with this client's retry policy and metrics.
    ///
    /// See [`retry_operation`](crate::retry_operation) for the retry and
    /// connectivity-recovery semantics.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `operation` on its final attempt.
    pub async fn run<F, Fut, T>(&self, operation_name: &str, operation: F) -> StoreResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = StoreResult<T>>,
    {
        retry_operation(
            self.conn.as_ref(),
            &self.retry,
            Some(&self.metrics),
            operation_name,
            operation,
        )
        .await
    }
}
