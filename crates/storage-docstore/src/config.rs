//! Configuration for the document-store retry layer.
//!
//! [`RetryConfig`] bounds the retry loop: how many attempts an operation
//! may consume and how long the first backoff pause lasts. Later pauses
//! grow linearly from `initial_delay` (see
//! [`retry_operation`](crate::retry_operation)).

use std::time::Duration;

use coursedesk_storage::ConfigError;
use serde::{Deserialize, Serialize};

/// Default attempt budget per operation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default first backoff delay.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);

/// Retry policy for operations against the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use coursedesk_storage_docstore::RetryConfig;
///
/// let config = RetryConfig::builder()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(250))
///     .build()?;
///
/// assert_eq!(config.max_attempts(), 5);
/// # Ok::<(), coursedesk_storage::ConfigError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub(crate) max_attempts: u32,

    /// Backoff delay after the first failed attempt. The delay after
    /// attempt `n` is `initial_delay * n`.
    #[serde(with = "humantime_serde", default = "default_initial_delay")]
    pub(crate) initial_delay: Duration,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_initial_delay() -> Duration {
    DEFAULT_INITIAL_DELAY
}

#[bon::bon]
impl RetryConfig {
    /// Creates a new retry configuration, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MustBePositive`] if `max_attempts` is zero.
    /// A zero `initial_delay` is allowed and means retries happen without
    /// a backoff pause.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_MAX_ATTEMPTS)] max_attempts: u32,
        #[builder(default = DEFAULT_INITIAL_DELAY)] initial_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::MustBePositive { field: "max_attempts" });
        }

        Ok(Self { max_attempts, initial_delay })
    }

    /// Returns the attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the first backoff delay.
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, initial_delay: DEFAULT_INITIAL_DELAY }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.initial_delay(), DEFAULT_INITIAL_DELAY);
    }

    #[test]
    fn test_builder_defaults_match_default_impl() {
        let built = RetryConfig::builder().build().unwrap();
        let default = RetryConfig::default();

        assert_eq!(built.max_attempts(), default.max_attempts());
        assert_eq!(built.initial_delay(), default.initial_delay());
    }

    #[test]
    fn test_builder_with_custom_values() {
        let config = RetryConfig::builder()
            .max_attempts(5)
            .initial_delay(Duration::from_millis(250))
            .build()
            .unwrap();

        assert_eq!(config.max_attempts(), 5);
        assert_eq!(config.initial_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_max_attempts_is_rejected() {
        let result = RetryConfig::builder().max_attempts(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::MustBePositive { field: "max_attempts" });
    }

    #[test]
    fn test_zero_initial_delay_is_allowed() {
        let config = RetryConfig::builder().initial_delay(Duration::ZERO).build().unwrap();
        assert_eq!(config.initial_delay(), Duration::ZERO);
    }

    #[test]
    fn test_deserialization_with_defaults() {
        let config: RetryConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.initial_delay, DEFAULT_INITIAL_DELAY);
    }

    #[test]
    fn test_deserialization_with_humantime_delay() {
        let json = r#"{ "max_attempts": 4, "initial_delay": "250ms" }"#;
        let config: RetryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.initial_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_deserialization_rejects_unknown_fields() {
        let json = r#"{ "max_attempts": 4, "jitter": true }"#;
        let result: Result<RetryConfig, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RetryConfig::builder()
            .max_attempts(7)
            .initial_delay(Duration::from_secs(2))
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: RetryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.max_attempts(), 7);
        assert_eq!(back.initial_delay(), Duration::from_secs(2));
    }
}
