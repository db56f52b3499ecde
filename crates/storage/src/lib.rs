//! Shared client-side storage plumbing for CourseDesk services.
//!
//! This crate provides the pieces that any CourseDesk document-store client
//! layer builds on, independent of which hosted backend it talks to:
//!
//! - [`StoreError`] / [`StoreResult`] — the canonical error taxonomy that
//!   backend adapters map their SDK errors into
//! - [`ClassifiableError`] and [`is_connectivity_error`] — the deterministic
//!   test distinguishing transient connectivity failures from everything else
//! - [`Metrics`] — lock-free counters for retry and reconnect activity
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Application code                    │
//! │        (dashboards, course/profile fetches)         │
//! ├─────────────────────────────────────────────────────┤
//! │            coursedesk-storage-docstore              │
//! │   DocStoreClient │ retry loop │ ConnectionControl   │
//! ├─────────────────────────────────────────────────────┤
//! │              coursedesk-storage (this crate)        │
//! │    StoreError │ classification │ Metrics            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! All operations in the client layer return [`StoreResult<T>`]. Backend
//! adapters map their internal error shapes to [`StoreError`] variants,
//! preserving the underlying cause through the `source` chain.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod metrics;

// Re-export primary types at crate root for convenience
pub use classify::{
    CONNECTIVITY_MESSAGE_MARKERS, ClassifiableError, RETRYABLE_CODES, is_connectivity_error,
};
pub use error::{BoxError, ConfigError, StoreError, StoreResult};
pub use metrics::{Metrics, MetricsSnapshot};
