//! Storage error types and result alias.
//!
//! This module defines the error types that can occur in the document-store
//! client layer. Backend adapters must map their SDK's errors to these
//! standardized types.
//!
//! # Error Types
//!
//! - [`StoreError::Remote`] - Failure reported by the document service itself
//! - [`StoreError::Connectivity`] - Failure to restore network access on the client
//! - [`StoreError::Internal`] - Client-side logic errors
//!
//! # Example
//!
//! ```
//! use coursedesk_storage::{StoreError, StoreResult};
//!
//! fn fetch_profile() -> StoreResult<Vec<u8>> {
//!     Err(StoreError::remote("unavailable", "service is temporarily unavailable"))
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::classify::{ClassifiableError, is_connectivity_error};

/// A boxed error type for source chain tracking.
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// Result type alias for document-store client operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the document-store client layer.
///
/// This enum represents the canonical set of errors the client layer can
/// produce. Backend adapters map their internal error types to these
/// variants, preserving the cause via the `#[source]` attribute.
///
/// # Non-exhaustive
///
/// This enum is marked `#[non_exhaustive]` — new variants may be added in
/// future minor releases without a semver-breaking change. Downstream match
/// expressions must include a wildcard arm (`_ =>`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Failure reported by the remote document service.
    ///
    /// Carries the service's machine-readable status code when one was
    /// present on the wire (e.g. `"unavailable"`, `"failed-precondition"`,
    /// `"permission-denied"`). Errors raised below the service layer — a
    /// dropped socket, an aborted request — arrive with no code at all,
    /// which is why `code` is optional.
    #[error("Remote store error{}: {message}", .code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
    Remote {
        /// Machine-readable status code, if the service supplied one.
        code: Option<String>,
        /// Human-readable description of the failure.
        message: String,
        /// The underlying error that caused this failure.
        #[source]
        source: Option<BoxError>,
    },

    /// Failure to restore network access on the store client.
    ///
    /// Raised when re-enabling the client's outbound network link fails.
    /// Inside the retry loop these are observability-only: logged and
    /// counted, never surfaced to the operation's caller.
    #[error("Connectivity error: {message}")]
    Connectivity {
        /// Description of the connectivity failure.
        message: String,
        /// The underlying error that caused restoration to fail.
        #[source]
        source: Option<BoxError>,
    },

    /// Internal client-side error.
    ///
    /// This is a catch-all for failures that don't originate from the
    /// remote service or the network link.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
        /// The underlying error that caused this internal failure.
        #[source]
        source: Option<BoxError>,
    },
}

impl StoreError {
    /// Creates a new `Remote` error with a status code and message.
    #[must_use]
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote { code: Some(code.into()), message: message.into(), source: None }
    }

    /// Creates a new `Remote` error that carries no status code.
    #[must_use]
    pub fn remote_uncoded(message: impl Into<String>) -> Self {
        Self::Remote { code: None, message: message.into(), source: None }
    }

    /// Creates a new `Remote` error with a status code, message, and source.
    #[must_use]
    pub fn remote_with_source(
        code: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Remote {
            code: Some(code.into()),
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `Connectivity` error with the given message.
    #[must_use]
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity { message: message.into(), source: None }
    }

    /// Creates a new `Connectivity` error with a message and source error.
    #[must_use]
    pub fn connectivity_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connectivity { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `Internal` error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Creates a new `Internal` error with a message and source error.
    #[must_use]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Returns `true` if this error is a transient connectivity failure
    /// worth retrying.
    ///
    /// Delegates to [`is_connectivity_error`], which inspects only the
    /// error's code and message.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        is_connectivity_error(self)
    }
}

impl ClassifiableError for StoreError {
    fn code(&self) -> Option<&str> {
        match self {
            Self::Remote { code, .. } => code.as_deref(),
            Self::Connectivity { .. } | Self::Internal { .. } => None,
        }
    }

    fn message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. }
            | Self::Connectivity { message, .. }
            | Self::Internal { message, .. } => Some(message),
        }
    }
}

/// Errors produced when validating configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field that must be strictly positive was zero.
    #[error("{field} must be positive")]
    MustBePositive {
        /// Name of the offending configuration field.
        field: &'static str,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_includes_code() {
        let err = StoreError::remote("unavailable", "service is down");
        assert_eq!(err.to_string(), "Remote store error (unavailable): service is down");
    }

    #[test]
    fn test_remote_error_display_without_code() {
        let err = StoreError::remote_uncoded("request dropped");
        assert_eq!(err.to_string(), "Remote store error: request dropped");
    }

    #[test]
    fn test_connectivity_error_display() {
        let err = StoreError::connectivity("enable failed");
        assert_eq!(err.to_string(), "Connectivity error: enable failed");
    }

    #[test]
    fn test_internal_error_display() {
        let err = StoreError::internal("bad state");
        assert_eq!(err.to_string(), "Internal error: bad state");
    }

    #[test]
    fn test_source_chain_is_preserved() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::connectivity_with_source("enable failed", cause);

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_remote_error_exposes_code_and_message() {
        let err = StoreError::remote("failed-precondition", "index missing");
        assert_eq!(err.code(), Some("failed-precondition"));
        assert_eq!(err.message(), Some("index missing"));
    }

    #[test]
    fn test_uncoded_errors_expose_no_code() {
        assert_eq!(StoreError::remote_uncoded("dropped").code(), None);
        assert_eq!(StoreError::connectivity("down").code(), None);
        assert_eq!(StoreError::internal("bug").code(), None);
    }

    #[test]
    fn test_is_transient_for_retryable_code() {
        assert!(StoreError::remote("unavailable", "backend down").is_transient());
        assert!(StoreError::remote("failed-precondition", "not ready").is_transient());
    }

    #[test]
    fn test_is_transient_for_offline_message() {
        assert!(StoreError::remote_uncoded("client is offline").is_transient());
    }

    #[test]
    fn test_is_transient_false_for_logic_errors() {
        assert!(!StoreError::remote("permission-denied", "access denied").is_transient());
        assert!(!StoreError::internal("bad state").is_transient());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MustBePositive { field: "max_attempts" };
        assert_eq!(err.to_string(), "max_attempts must be positive");
    }
}
