//! Error types for the Webex API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use webex_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Webex access token.")]
    EmptyAccessToken,

    /// No access token was supplied and none was found in the environment.
    #[error("You must provide a Webex access token to interact with the Webex APIs, either via a WEBEX_ACCESS_TOKEN environment variable or via the access_token setting.")]
    MissingAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. The base URL must contain a valid scheme and network location (e.g., 'https://webexapis.com/v1/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Proxy URL is invalid.
    #[error("Invalid proxy URL '{url}': {reason}")]
    InvalidProxy {
        /// The invalid proxy URL that was provided.
        url: String,
        /// Why the proxy was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the HTTP client builder.
        reason: String,
    },
}
