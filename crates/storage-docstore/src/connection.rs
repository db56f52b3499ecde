//! Connectivity control for the document-store client.
//!
//! The hosted document database's SDK keeps a process-wide flag for whether
//! the client may use the network; when the application detects a degraded
//! link it can ask the SDK to re-enable it. [`ConnectionControl`] is the
//! seam over that capability, and [`ensure_connection`] is the checked
//! wrapper the retry loop and application code call.

use async_trait::async_trait;
use coursedesk_storage::{StoreError, StoreResult};

/// Network-enable control surface of a document-store client handle.
///
/// Implementations wrap a concrete SDK client. The underlying operation is
/// idempotent: enabling an already-enabled network is a no-op at the
/// client, so concurrent calls from independent retry loops may race
/// harmlessly — the worst case is a redundant enable.
#[async_trait]
pub trait ConnectionControl: Send + Sync {
    /// Re-enables outbound network access for the client.
    ///
    /// # Errors
    ///
    /// Fails when the link to the service cannot be re-established.
    async fn enable_network(&self) -> StoreResult<()>;
}

/// Issues a network re-enable command to the client handle.
///
/// Succeeds silently, or fails with [`StoreError::Connectivity`] wrapping
/// the underlying cause. The caller decides whether a failure is fatal;
/// the retry loop treats it as best-effort and never propagates it.
///
/// # Errors
///
/// Returns [`StoreError::Connectivity`] when [`ConnectionControl::enable_network`] fails.
pub async fn ensure_connection<C>(conn: &C) -> StoreResult<()>
where
    C: ConnectionControl + ?Sized,
{
    conn.enable_network().await.map_err(|err| {
        StoreError::connectivity_with_source("failed to re-enable network access", err)
    })
}
