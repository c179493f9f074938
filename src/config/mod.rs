//! Configuration types for the Webex API SDK.
//!
//! This module provides the configuration consumed by the REST session:
//! credentials, base URL, timeouts, rate-limit behavior and optional
//! tracking headers.
//!
//! # Overview
//!
//! - [`WebexConfig`]: The immutable configuration struct
//! - [`WebexConfigBuilder`]: A builder for constructing [`WebexConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use webex_api::{AccessToken, WebexConfig};
//!
//! let config = WebexConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .wait_on_rate_limit(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.wait_on_rate_limit());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the Webex REST API.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1/";

/// Default per-request timeout in seconds.
pub const DEFAULT_SINGLE_REQUEST_TIMEOUT: u64 = 60;

/// Whether sessions wait and retry on rate-limited responses by default.
pub const DEFAULT_WAIT_ON_RATE_LIMIT: bool = true;

/// Default number of rate-limit waits allowed for a single request.
pub const DEFAULT_MAX_RATE_LIMIT_RETRIES: u32 = 5;

/// Default upper bound, in seconds, on a single rate-limit wait.
pub const DEFAULT_MAX_RATE_LIMIT_WAIT: u64 = 300;

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV_VAR: &str = "WEBEX_ACCESS_TOKEN";

/// Environment variable holding the partner identifier.
pub const BE_GEO_ID_ENV_VAR: &str = "BE_GEO_ID";

/// Environment variable holding the caller identifier.
pub const CALLER_ENV_VAR: &str = "WEBEX_PYTHON_SDK_CALLER";

/// Configuration for the Webex API SDK.
///
/// Immutable once built. Every request issued by a
/// [`RestSession`](crate::clients::RestSession) reads from it.
///
/// # Thread Safety
///
/// `WebexConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct WebexConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    single_request_timeout: Duration,
    wait_on_rate_limit: bool,
    max_rate_limit_retries: u32,
    max_rate_limit_wait: Duration,
    proxy: Option<String>,
    be_geo_id: Option<String>,
    caller: Option<String>,
    disable_ssl_verify: bool,
    user_agent_prefix: Option<String>,
}

impl WebexConfig {
    /// Creates a new builder for constructing a `WebexConfig`.
    #[must_use]
    pub fn builder() -> WebexConfigBuilder {
        WebexConfigBuilder::new()
    }

    /// Builds a configuration entirely from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if `WEBEX_ACCESS_TOKEN`
    /// is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        WebexConfigBuilder::new().build()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the timeout applied to each individual HTTP request.
    #[must_use]
    pub const fn single_request_timeout(&self) -> Duration {
        self.single_request_timeout
    }

    /// Returns whether rate-limited requests are retried after waiting.
    #[must_use]
    pub const fn wait_on_rate_limit(&self) -> bool {
        self.wait_on_rate_limit
    }

    /// Returns the maximum number of rate-limit waits for one request.
    #[must_use]
    pub const fn max_rate_limit_retries(&self) -> u32 {
        self.max_rate_limit_retries
    }

    /// Returns the longest single wait taken after a 429.
    #[must_use]
    pub const fn max_rate_limit_wait(&self) -> Duration {
        self.max_rate_limit_wait
    }

    /// Returns the proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the partner identifier used for usage tracking.
    #[must_use]
    pub fn be_geo_id(&self) -> Option<&str> {
        self.be_geo_id.as_deref()
    }

    /// Returns the caller identifier used for usage tracking.
    #[must_use]
    pub fn caller(&self) -> Option<&str> {
        self.caller.as_deref()
    }

    /// Returns whether TLS certificate verification is disabled.
    #[must_use]
    pub const fn disable_ssl_verify(&self) -> bool {
        self.disable_ssl_verify
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebexConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebexConfig>();
};

/// Builder for constructing [`WebexConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `single_request_timeout`: 60 seconds
/// - `wait_on_rate_limit`: `true`
/// - `max_rate_limit_retries`: 5
/// - `max_rate_limit_wait`: 300 seconds
/// - `access_token`: `WEBEX_ACCESS_TOKEN` from the environment
/// - `be_geo_id`: `BE_GEO_ID` from the environment
/// - `caller`: `WEBEX_PYTHON_SDK_CALLER` from the environment
/// - everything else: unset / `false`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use webex_api::{AccessToken, BaseUrl, WebexConfig};
///
/// let config = WebexConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("https://webexapis.com/v1").unwrap())
///     .single_request_timeout(Duration::from_secs(30))
///     .max_rate_limit_retries(3)
///     .caller("my-integration")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_rate_limit_retries(), 3);
/// ```
#[derive(Debug, Default)]
pub struct WebexConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    single_request_timeout: Option<Duration>,
    wait_on_rate_limit: Option<bool>,
    max_rate_limit_retries: Option<u32>,
    max_rate_limit_wait: Option<Duration>,
    proxy: Option<String>,
    be_geo_id: Option<String>,
    caller: Option<String>,
    disable_ssl_verify: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl WebexConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the timeout applied to each individual HTTP request.
    #[must_use]
    pub const fn single_request_timeout(mut self, timeout: Duration) -> Self {
        self.single_request_timeout = Some(timeout);
        self
    }

    /// Enables or disables waiting and retrying on rate-limited responses.
    #[must_use]
    pub const fn wait_on_rate_limit(mut self, wait: bool) -> Self {
        self.wait_on_rate_limit = Some(wait);
        self
    }

    /// Sets the maximum number of rate-limit waits for a single request.
    #[must_use]
    pub const fn max_rate_limit_retries(mut self, retries: u32) -> Self {
        self.max_rate_limit_retries = Some(retries);
        self
    }

    /// Caps a single rate-limit wait, whatever `Retry-After` asks for.
    #[must_use]
    pub const fn max_rate_limit_wait(mut self, wait: Duration) -> Self {
        self.max_rate_limit_wait = Some(wait);
        self
    }

    /// Routes all requests through the given proxy URL.
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Sets the partner identifier sent in the `X-BEGeo-Id` header.
    #[must_use]
    pub fn be_geo_id(mut self, id: impl Into<String>) -> Self {
        self.be_geo_id = Some(id.into());
        self
    }

    /// Sets the caller identifier sent in the `X-Webex-Caller` header.
    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Disables TLS certificate verification.
    #[must_use]
    pub const fn disable_ssl_verify(mut self, disable: bool) -> Self {
        self.disable_ssl_verify = Some(disable);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebexConfig`].
    ///
    /// Unset tracking values and the access token fall back to their
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if no token was set and
    /// none is present in the environment, and [`ConfigError::EmptyAccessToken`]
    /// if the environment variable is blank.
    pub fn build(self) -> Result<WebexConfig, ConfigError> {
        let access_token = match self.access_token {
            Some(token) => token,
            None => {
                let raw = env_value(ACCESS_TOKEN_ENV_VAR).ok_or(ConfigError::MissingAccessToken)?;
                AccessToken::new(raw)?
            }
        };

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(WebexConfig {
            access_token,
            base_url,
            single_request_timeout: self
                .single_request_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_SINGLE_REQUEST_TIMEOUT)),
            wait_on_rate_limit: self.wait_on_rate_limit.unwrap_or(DEFAULT_WAIT_ON_RATE_LIMIT),
            max_rate_limit_retries: self
                .max_rate_limit_retries
                .unwrap_or(DEFAULT_MAX_RATE_LIMIT_RETRIES),
            max_rate_limit_wait: self
                .max_rate_limit_wait
                .unwrap_or(Duration::from_secs(DEFAULT_MAX_RATE_LIMIT_WAIT)),
            proxy: self.proxy,
            be_geo_id: self.be_geo_id.or_else(|| env_value(BE_GEO_ID_ENV_VAR)),
            caller: self.caller.or_else(|| env_value(CALLER_ENV_VAR)),
            disable_ssl_verify: self.disable_ssl_verify.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Reads a non-empty environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
