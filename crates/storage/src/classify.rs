//! Connectivity classification for store errors.
//!
//! The retry layer must decide, for every failure, whether the cause was a
//! degraded network link (worth nudging the connection and retrying) or a
//! real error (propagate immediately). That decision is a pure function of
//! two optional facts about the error: its machine-readable code and its
//! human-readable message.
//!
//! Rather than duck-typing over arbitrary error shapes, the capability is
//! expressed as the [`ClassifiableError`] trait. Adapters map foreign error
//! shapes into something implementing it before classification.

/// Status codes the hosted document service emits for transient
/// connectivity conditions.
///
/// `failed-precondition` is included because the service reports a client
/// that has been taken offline under that code rather than `unavailable`.
pub const RETRYABLE_CODES: &[&str] = &["unavailable", "failed-precondition"];

/// Message substrings that mark a connectivity failure when no retryable
/// code is present.
///
/// Matching is case-sensitive: these are the exact spellings the client SDK
/// and the browser/network layer use in their diagnostics.
pub const CONNECTIVITY_MESSAGE_MARKERS: &[&str] = &["offline", "network", "ERR_ABORTED"];

/// An error that can be classified as connectivity-related or not.
///
/// Both accessors are optional: errors raised below the service layer often
/// carry a message but no code, and foreign error shapes may carry neither.
/// Absent fields are treated as non-matching by [`is_connectivity_error`],
/// never as an error.
pub trait ClassifiableError {
    /// Machine-readable status code, if the error carries one.
    fn code(&self) -> Option<&str>;

    /// Human-readable message, if the error carries one.
    fn message(&self) -> Option<&str>;
}

/// Returns `true` if the error is a transient connectivity failure.
///
/// An error classifies as connectivity-related iff its code is a member of
/// [`RETRYABLE_CODES`], or its message contains one of the case-sensitive
/// substrings in [`CONNECTIVITY_MESSAGE_MARKERS`]. This function cannot
/// fail and has no side effects.
#[must_use]
pub fn is_connectivity_error<E>(error: &E) -> bool
where
    E: ClassifiableError + ?Sized,
{
    if let Some(code) = error.code()
        && RETRYABLE_CODES.contains(&code)
    {
        return true;
    }

    if let Some(message) = error.message() {
        return CONNECTIVITY_MESSAGE_MARKERS.iter().any(|marker| message.contains(marker));
    }

    false
}
