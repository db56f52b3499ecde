//! Shared test utilities for the document-store client layer.
//!
//! This module provides a scriptable [`ConnectionControl`] implementation
//! and constructors for the error shapes the hosted service produces. It
//! is feature-gated behind `testutil` to prevent leaking into production
//! builds.
//!
//! # Usage
//!
//! In integration tests, enable the feature in `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! coursedesk-storage-docstore = { path = "../storage-docstore", features = ["testutil"] }
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use coursedesk_storage::{StoreError, StoreResult};

use crate::connection::ConnectionControl;

/// A [`ConnectionControl`] fake whose first N `enable_network` calls fail.
///
/// Every call is counted, so tests can assert exactly how many times the
/// retry loop nudged the connection.
#[derive(Debug)]
pub struct FlakyConnection {
    enable_calls: AtomicU32,
    failing_first: u32,
}

impl FlakyConnection {
    /// A connection whose `enable_network` always succeeds.
    #[must_use]
    pub fn reliable() -> Self {
        Self::failing_first(0)
    }

    /// A connection whose first `count` `enable_network` calls fail, after
    /// which it recovers.
    #[must_use]
    pub fn failing_first(count: u32) -> Self {
        Self { enable_calls: AtomicU32::new(0), failing_first: count }
    }

    /// A connection whose `enable_network` never succeeds.
    #[must_use]
    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    /// Returns how many times `enable_network` has been called.
    #[must_use]
    pub fn enable_calls(&self) -> u32 {
        self.enable_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConnectionControl for FlakyConnection {
    async fn enable_network(&self) -> StoreResult<()> {
        let call = self.enable_calls.fetch_add(1, Ordering::Relaxed);
        if call < self.failing_first {
            Err(StoreError::remote_uncoded("link to document service could not be established"))
        } else {
            Ok(())
        }
    }
}

/// The error the service reports while it is unreachable.
#[must_use]
pub fn unavailable() -> StoreError {
    StoreError::remote("unavailable", "the service is temporarily unavailable")
}

/// The error the SDK reports while the client is marked offline.
#[must_use]
pub fn client_offline() -> StoreError {
    StoreError::remote("failed-precondition", "the client is offline")
}

/// A dropped-request error with no status code, as raised below the
/// service layer.
#[must_use]
pub fn request_aborted() -> StoreError {
    StoreError::remote_uncoded("fetch failed: net::ERR_ABORTED")
}

/// A non-retryable authorization error.
#[must_use]
pub fn permission_denied() -> StoreError {
    StoreError::remote("permission-denied", "missing or insufficient permissions")
}
