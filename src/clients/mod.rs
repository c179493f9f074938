//! HTTP client types for Webex API communication.
//!
//! This module provides the core of the SDK: the REST session that every
//! resource wrapper is built on, together with request/response types,
//! response classification, rate-limit handling and pagination.
//!
//! # Overview
//!
//! - [`RestSession`]: Authenticated session exposing `get`, `post`, `put`,
//!   `delete` and the paginated `get_items`
//! - [`HttpRequest`]: A request descriptor (method, path, query, body, headers)
//! - [`HttpResponse`]: A raw response with `Link`, `Retry-After` and
//!   `trackingId` parsed out
//! - [`check_response`]: Classifies a response as success, rate limited or failed
//! - [`RateLimitPolicy`]: Decides whether a 429 is waited out or surfaced
//! - [`Paginator`]: Follows `rel="next"` links as a lazy item stream
//! - [`HttpError`]: Unified error type for everything above
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use webex_api::clients::{QueryParams, RestSession};
//!
//! let session = Arc::new(RestSession::new(&config)?);
//!
//! let mut params = QueryParams::new();
//! params.insert("max", 50);
//!
//! let mut rooms = session.get_items("rooms", Some(params));
//! while let Some(room) = rooms.next().await {
//!     println!("{}", room?["title"]);
//! }
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Waits for `Retry-After` seconds (15 if absent,
//!   never less than 1) and re-sends the identical request, when waiting is
//!   enabled and the per-request wait budget is not used up
//! - **Any other unexpected status**: Returned immediately as [`ApiError`]
//! - **Transport failures and timeouts**: Returned immediately as
//!   [`HttpError::Network`]

mod errors;
mod http_request;
mod http_response;
mod pagination;
mod rate_limit;
mod session;
mod validation;

pub use errors::{
    ApiError, HttpError, InvalidHttpRequestError, MalformedResponseError,
    MaxRateLimitRetriesError, RateLimitError,
};
pub use http_request::{
    FilePart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartForm, QueryParams,
    RequestBody,
};
pub use http_response::{HttpResponse, PaginationInfo, DEFAULT_RETRY_AFTER};
pub use pagination::{Page, Paginator};
pub use rate_limit::{RateLimitDecision, RateLimitFailure, RateLimitPolicy};
pub use session::{RestSession, JSON_CONTENT_TYPE, SDK_VERSION};
pub use validation::{check_response, status_description, ResponseStatus, RATE_LIMIT_RESPONSE_CODE};
