//! Rate-limit coordination.
//!
//! Decides, per request, what happens after a 429: surface the error, or
//! pause for the server-declared wait and re-issue the identical request.
//! No state survives between requests.

use std::time::Duration;

use crate::clients::errors::{ApiError, HttpError, MaxRateLimitRetriesError, RateLimitError};
use crate::config::{WebexConfig, DEFAULT_MAX_RATE_LIMIT_WAIT};

/// What to do after a rate-limited response.
#[derive(Debug, Clone, PartialEq)]
pub enum RateLimitDecision {
    /// Sleep for the given duration, then re-send the same request.
    Wait(Duration),
    /// Give up and hand this error to the caller.
    Surface(RateLimitFailure),
}

/// The error surfaced when a rate limit is not (or no longer) retried.
#[derive(Debug, Clone, PartialEq)]
pub enum RateLimitFailure {
    /// Waiting is disabled for this session.
    NotRetried(RateLimitError),
    /// The wait budget for this request was used up.
    Exhausted(MaxRateLimitRetriesError),
}

impl From<RateLimitFailure> for HttpError {
    fn from(failure: RateLimitFailure) -> Self {
        match failure {
            RateLimitFailure::NotRetried(e) => Self::RateLimit(e),
            RateLimitFailure::Exhausted(e) => Self::MaxRetries(e),
        }
    }
}

/// Retry policy applied to rate-limited responses.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use webex_api::clients::{RateLimitDecision, RateLimitPolicy};
/// # use webex_api::clients::ApiError;
/// # let error = ApiError { status_code: 429, status: None, description: None, details: None, message: None, tracking_id: None };
///
/// let policy = RateLimitPolicy::new(true, 3);
/// assert_eq!(
///     policy.decide(0, 2, error),
///     RateLimitDecision::Wait(Duration::from_secs(2)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    wait_on_rate_limit: bool,
    max_retries: u32,
    max_wait: Duration,
}

impl RateLimitPolicy {
    /// Creates a policy whose waits are capped at
    /// [`DEFAULT_MAX_RATE_LIMIT_WAIT`] seconds.
    #[must_use]
    pub const fn new(wait_on_rate_limit: bool, max_retries: u32) -> Self {
        Self {
            wait_on_rate_limit,
            max_retries,
            max_wait: Duration::from_secs(DEFAULT_MAX_RATE_LIMIT_WAIT),
        }
    }

    /// Caps every single wait at `max_wait`.
    #[must_use]
    pub const fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Creates the policy described by a configuration.
    #[must_use]
    pub const fn from_config(config: &WebexConfig) -> Self {
        Self::new(config.wait_on_rate_limit(), config.max_rate_limit_retries())
            .with_max_wait(config.max_rate_limit_wait())
    }

    /// Returns whether this policy ever waits.
    #[must_use]
    pub const fn waits(&self) -> bool {
        self.wait_on_rate_limit
    }

    /// Returns the maximum number of waits per request.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the longest single wait.
    #[must_use]
    pub const fn max_wait(&self) -> Duration {
        self.max_wait
    }

    /// Decides what to do after a 429.
    ///
    /// `retries_so_far` counts the waits already performed for this
    /// request; `retry_after` is the server hint in seconds. The wait is
    /// never shorter than one second nor longer than the policy's max wait.
    #[must_use]
    pub fn decide(
        &self,
        retries_so_far: u32,
        retry_after: u64,
        error: ApiError,
    ) -> RateLimitDecision {
        let retry_after = retry_after.max(1);

        if !self.wait_on_rate_limit {
            return RateLimitDecision::Surface(RateLimitFailure::NotRetried(RateLimitError {
                retry_after,
                api: error,
            }));
        }

        if retries_so_far >= self.max_retries {
            return RateLimitDecision::Surface(RateLimitFailure::Exhausted(
                MaxRateLimitRetriesError {
                    retries: retries_so_far,
                    retry_after,
                    api: error,
                },
            ));
        }

        RateLimitDecision::Wait(Duration::from_secs(retry_after).min(self.max_wait))
    }
}
