//! Document-store client layer for CourseDesk.
//!
//! This crate wraps operations against the hosted document database with
//! connectivity recovery and bounded linear-backoff retry. The hosted SDK
//! keeps a process-wide network flag that can leave the client stuck
//! offline after a dropped link; this layer nudges that flag back on
//! around every attempt and retries failures that classify as transient
//! connectivity problems.
//!
//! # Components
//!
//! - [`ConnectionControl`] — the seam over the SDK's network-enable
//!   capability, with [`ensure_connection`] as the checked wrapper
//! - [`retry_operation`] — the retry loop: classification gate, linear
//!   backoff, best-effort connectivity nudges
//! - [`RetryConfig`] — attempt budget and backoff policy
//! - [`DocStoreClient`] — the handle + policy + metrics bundle that
//!   application code holds
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use coursedesk_storage_docstore::{DocStoreClient, RetryConfig};
//! # use async_trait::async_trait;
//! # use coursedesk_storage::StoreResult;
//! # use coursedesk_storage_docstore::ConnectionControl;
//! # struct SdkHandle;
//! # #[async_trait]
//! # impl ConnectionControl for SdkHandle {
//! #     async fn enable_network(&self) -> StoreResult<()> { Ok(()) }
//! # }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DocStoreClient::new(Arc::new(SdkHandle), RetryConfig::default());
//!
//! // Transient connectivity failures inside the closure are retried;
//! // anything else propagates immediately.
//! let enrolled = client.run("count_enrollments", || async { Ok(12) }).await?;
//! assert_eq!(enrolled, 12);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Operations return [`StoreResult`]. The error surfaced after retries is
//! always the one the operation itself last produced — the loop never
//! substitutes a synthetic "retries exhausted" error. Connectivity-nudge
//! failures are logged and counted but never surfaced.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod connection;
mod retry;

/// Shared test utilities for the document-store client layer.
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

/// Retrying client wrapper.
pub use client::DocStoreClient;
/// Retry policy configuration and default constants.
pub use config::{DEFAULT_INITIAL_DELAY, DEFAULT_MAX_ATTEMPTS, RetryConfig};
/// Connectivity control seam and checked wrapper.
pub use connection::{ConnectionControl, ensure_connection};
/// Re-exported plumbing types from the core storage crate.
pub use coursedesk_storage::{
    ClassifiableError, ConfigError, Metrics, MetricsSnapshot, StoreError, StoreResult,
    is_connectivity_error,
};
/// The retry loop.
pub use retry::retry_operation;
