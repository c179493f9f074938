//! HTTP-specific error types for the Webex API SDK.
//!
//! This module contains the error types surfaced by the REST session, the
//! paginator and the resource wrappers.
//!
//! # Error Handling
//!
//! - [`ApiError`]: Any unexpected status code returned by the API
//! - [`RateLimitError`]: A 429 response that will not be retried
//! - [`MaxRateLimitRetriesError`]: Rate-limit waits were exhausted
//! - [`MalformedResponseError`]: A success status with an undecodable body
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above plus
//!   transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use webex_api::clients::HttpError;
//!
//! match session.get("rooms/abc", None).await {
//!     Ok(body) => println!("Room: {body}"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status_code, e),
//!     Err(HttpError::RateLimit(e)) => println!("Retry in {}s", e.retry_after),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::HttpResponse;
use crate::clients::validation::status_description;

/// Error returned when the API responds with an unexpected status code.
///
/// Carries everything needed to build a single summary line: the status
/// code, reason phrase, a best-effort message from the JSON body and the
/// tracking id used by Webex support.
///
/// # Example
///
/// ```rust
/// use webex_api::clients::ApiError;
///
/// let error = ApiError {
///     status_code: 404,
///     status: Some("Not Found".to_string()),
///     description: None,
///     details: None,
///     message: Some("not found".to_string()),
///     tracking_id: Some("abc".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "[404] Not Found - not found [Tracking ID: abc]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The HTTP reason phrase, if known.
    pub status: Option<String>,
    /// A canned description of what the status code means for this API.
    pub description: Option<&'static str>,
    /// The parsed JSON error body, when the response declared JSON.
    pub details: Option<Value>,
    /// The `message` field of the error body.
    pub message: Option<String>,
    /// The `trackingId` from the body, or from the response header.
    pub tracking_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a received response.
    ///
    /// A body that claims to be JSON but fails to parse is logged and
    /// otherwise ignored.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let details = if response.is_json() {
            match serde_json::from_str::<Value>(&response.body) {
                Ok(value) => Some(value),
                Err(error) => {
                    tracing::warn!(
                        status = response.code,
                        %error,
                        "Error parsing JSON response body"
                    );
                    None
                }
            }
        } else {
            None
        };

        let body_field = |key: &str| {
            details
                .as_ref()
                .and_then(|d| d.get(key))
                .and_then(Value::as_str)
                .map(String::from)
        };

        let message = body_field("message");
        let tracking_id = body_field("trackingId")
            .or_else(|| response.header("trackingid").map(String::from));

        Self {
            status_code: response.code,
            status: response.reason.clone(),
            description: status_description(response.code),
            details,
            message,
            tracking_id,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.status_code)?;
        if let Some(status) = &self.status {
            write!(f, " {status}")?;
        }
        let detail = self
            .message
            .as_deref()
            .or(self.description)
            .unwrap_or("Unknown Error");
        write!(f, " - {detail}")?;
        if let Some(tracking_id) = &self.tracking_id {
            write!(f, " [Tracking ID: {tracking_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error returned when a request was rate limited and will not be retried.
///
/// `retry_after` is the number of seconds the server asked the client to
/// wait, defaulting to 15 and never less than 1.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Rate limit exceeded, retry after {retry_after}s: {api}")]
pub struct RateLimitError {
    /// Seconds to wait before retrying.
    pub retry_after: u64,
    /// The underlying API error details.
    pub api: ApiError,
}

/// Error returned when a request kept being rate limited after the
/// configured number of waits.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Exceeded maximum rate-limit retry count of {retries}. Last response: {api}")]
pub struct MaxRateLimitRetriesError {
    /// The number of waits that were performed.
    pub retries: u32,
    /// The wait hint carried by the last response.
    pub retry_after: u64,
    /// The last API error received.
    pub api: ApiError,
}

/// Error returned when the server reported success but the body could not
/// be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed response (status {status_code}): {reason}")]
pub struct MalformedResponseError {
    /// The status code of the response.
    pub status_code: u16,
    /// What was wrong with the body.
    pub reason: String,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a request body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that was used.
        method: String,
    },

    /// The request path could not be resolved against the base URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The path or URL that was rejected.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A header name or value was rejected.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The header name.
        name: String,
    },

    /// An argument could not be turned into a request.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The argument name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use webex_api::clients::HttpError;
///
/// match result {
///     Err(HttpError::Api(e)) => { /* unexpected status */ }
///     Err(HttpError::RateLimit(e)) => { /* wait e.retry_after seconds */ }
///     Err(HttpError::Network(e)) if e.is_timeout() => { /* timed out */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API returned an unexpected status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request was rate limited and will not be retried.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// The request stayed rate limited after all allowed waits.
    #[error(transparent)]
    MaxRetries(#[from] MaxRateLimitRetriesError),

    /// The response reported success but its body was undecodable.
    #[error(transparent)]
    Malformed(#[from] MalformedResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A token could not be signed.
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl HttpError {
    /// Returns the HTTP status code carried by the error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            Self::RateLimit(e) => Some(e.api.status_code),
            Self::MaxRetries(e) => Some(e.api.status_code),
            Self::Malformed(e) => Some(e.status_code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Signing(_) => None,
        }
    }

    /// Returns the Webex tracking id carried by the error, if any.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.tracking_id.as_deref(),
            Self::RateLimit(e) => e.api.tracking_id.as_deref(),
            Self::MaxRetries(e) => e.api.tracking_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the server wait hint for rate-limit errors.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit(e) => Some(e.retry_after),
            Self::MaxRetries(e) => Some(e.retry_after),
            _ => None,
        }
    }

    /// Returns `true` if the transport timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn json_response(code: u16, body: &str, extra: &[(&str, &str)]) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json; charset=utf-8".to_string()],
        );
        for (name, value) in extra {
            headers.insert((*name).to_string(), vec![(*value).to_string()]);
        }
        HttpResponse::new(code, None, headers, body.to_string())
    }

    #[test]
    fn test_api_error_extracts_message_and_tracking_id() {
        let response = json_response(404, r#"{"message":"not found","trackingId":"abc"}"#, &[]);
        let error = ApiError::from_response(&response);

        assert_eq!(error.status_code, 404);
        assert_eq!(error.message.as_deref(), Some("not found"));
        assert_eq!(error.tracking_id.as_deref(), Some("abc"));
        assert_eq!(
            error.details,
            Some(json!({"message": "not found", "trackingId": "abc"}))
        );
    }

    #[test]
    fn test_api_error_falls_back_to_tracking_id_header() {
        let response = json_response(500, r#"{"message":"boom"}"#, &[("trackingid", "hdr-1")]);
        let error = ApiError::from_response(&response);

        assert_eq!(error.tracking_id.as_deref(), Some("hdr-1"));
    }

    #[test]
    fn test_api_error_tolerates_invalid_json() {
        let response = json_response(502, "<html>bad gateway</html>", &[]);
        let error = ApiError::from_response(&response);

        assert!(error.details.is_none());
        assert!(error.message.is_none());
        assert!(error.to_string().contains("upstream"));
    }

    #[test]
    fn test_api_error_ignores_non_json_bodies() {
        let response = HttpResponse::new(
            400,
            Some("Bad Request".to_string()),
            HashMap::new(),
            r#"{"message":"ignored"}"#.to_string(),
        );
        let error = ApiError::from_response(&response);

        assert!(error.details.is_none());
        assert!(error.message.is_none());
    }

    #[test]
    fn test_api_error_display_falls_back_to_unknown() {
        let error = ApiError {
            status_code: 499,
            status: None,
            description: None,
            details: None,
            message: None,
            tracking_id: None,
        };
        assert_eq!(error.to_string(), "[499] - Unknown Error");
    }

    #[test]
    fn test_http_error_accessors() {
        let api = ApiError {
            status_code: 429,
            status: Some("Too Many Requests".to_string()),
            description: None,
            details: None,
            message: None,
            tracking_id: Some("t-1".to_string()),
        };
        let error = HttpError::from(RateLimitError {
            retry_after: 7,
            api,
        });

        assert_eq!(error.status_code(), Some(429));
        assert_eq!(error.tracking_id(), Some("t-1"));
        assert_eq!(error.retry_after(), Some(7));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_invalid_request_error_message() {
        let error = InvalidHttpRequestError::BodyNotAllowed {
            method: "GET".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a request body with GET.");
    }
}
