//! Response classification.
//!
//! Every response the session receives is checked against the status code
//! expected for the verb that produced it. Classification never raises;
//! the session decides what to do with each outcome.

use crate::clients::errors::ApiError;
use crate::clients::http_response::HttpResponse;

/// Status code signalling a rate-limited request.
pub const RATE_LIMIT_RESPONSE_CODE: u16 = 429;

/// The outcome of checking a response against its expected status code.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseStatus {
    /// The status matched; the body can be extracted.
    Success,
    /// The server asked the client to wait `retry_after` seconds.
    RateLimited {
        /// Seconds to wait, at least one.
        retry_after: u64,
        /// Error details of the 429 response.
        error: ApiError,
    },
    /// Any other unexpected status.
    Failed(ApiError),
}

/// Classifies a response against the expected status code.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use webex_api::clients::{check_response, HttpResponse, ResponseStatus};
///
/// let response = HttpResponse::new(204, None, HashMap::new(), String::new());
/// assert_eq!(check_response(&response, 204), ResponseStatus::Success);
/// ```
#[must_use]
pub fn check_response(response: &HttpResponse, expected: u16) -> ResponseStatus {
    if response.code == expected {
        ResponseStatus::Success
    } else if response.code == RATE_LIMIT_RESPONSE_CODE {
        ResponseStatus::RateLimited {
            retry_after: response.retry_after(),
            error: ApiError::from_response(response),
        }
    } else {
        ResponseStatus::Failed(ApiError::from_response(response))
    }
}

/// Returns the Webex description for a status code.
#[must_use]
pub const fn status_description(code: u16) -> Option<&'static str> {
    Some(match code {
        200 => "Successful request with body content.",
        204 => "Successful request without body content.",
        400 => "The request was invalid or cannot be otherwise served.",
        401 => "Authentication credentials were missing or incorrect.",
        403 => "The request is understood, but it has been refused or access is not allowed.",
        404 => "The URI requested is invalid or the resource requested, such as a user, does not exist. Also returned when the requested format is not supported by the requested method.",
        405 => "The request was made to a resource using an HTTP request method that is not supported.",
        409 => "The request could not be processed because it conflicts with some established rule of the system. For example, a person may not be added to a room more than once.",
        410 => "The requested resource is no longer available.",
        415 => "The request was made to a resource without specifying a media type or used a media type that is not supported.",
        423 => "The requested resource is temporarily unavailable. A `Retry-After` header may be present that specifies how many seconds you need to wait before attempting the request again.",
        429 => "Too many requests have been sent in a given amount of time and the request has been rate limited. A `Retry-After` header should be present that specifies how many seconds you need to wait before a successful request can be made.",
        500 => "Something went wrong on the server. If the issue persists, feel free to contact the Webex Developer Support team.",
        502 => "The server received an invalid response from an upstream server while processing the request. Try again later.",
        503 => "Server is overloaded with requests. Try again later.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        let headers = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect::<HashMap<_, _>>();
        HttpResponse::new(code, None, headers, body.to_string())
    }

    #[test]
    fn test_expected_status_is_success() {
        assert_eq!(check_response(&response(200, &[], "{}"), 200), ResponseStatus::Success);
        assert_eq!(check_response(&response(204, &[], ""), 204), ResponseStatus::Success);
    }

    #[test]
    fn test_other_2xx_is_not_success_when_unexpected() {
        assert!(matches!(
            check_response(&response(200, &[], "{}"), 204),
            ResponseStatus::Failed(e) if e.status_code == 200
        ));
    }

    #[test]
    fn test_429_is_rate_limited_with_retry_after() {
        let status = check_response(&response(429, &[("retry-after", "2")], ""), 200);
        assert!(matches!(
            status,
            ResponseStatus::RateLimited { retry_after: 2, .. }
        ));

        let status = check_response(&response(429, &[], ""), 200);
        assert!(matches!(
            status,
            ResponseStatus::RateLimited { retry_after: 15, .. }
        ));
    }

    #[test]
    fn test_404_json_is_classified_as_failure() {
        let status = check_response(
            &response(
                404,
                &[("content-type", "application/json")],
                r#"{"message":"not found","trackingId":"abc"}"#,
            ),
            200,
        );
        match status {
            ResponseStatus::Failed(error) => {
                assert_eq!(error.message.as_deref(), Some("not found"));
                assert_eq!(error.tracking_id.as_deref(), Some("abc"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_status_description_table() {
        assert!(status_description(401).unwrap().contains("Authentication"));
        assert!(status_description(418).is_none());
    }
}
