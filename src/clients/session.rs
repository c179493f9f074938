//! REST session for Webex API communication.
//!
//! This module provides the [`RestSession`] type: it owns the transport,
//! the base URL, the default headers and the rate-limit policy, and exposes
//! the verb methods every resource wrapper is built on.

use std::collections::HashMap;
use std::sync::Arc;

use futures::stream::BoxStream;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde_json::Value;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, QueryParams, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::pagination::{Page, Paginator};
use crate::clients::rate_limit::{RateLimitDecision, RateLimitPolicy};
use crate::clients::validation::{check_response, ResponseStatus};
use crate::config::{BaseUrl, WebexConfig};
use crate::error::ConfigError;
use crate::models::JsonObject;

/// SDK version, used in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content type sent with JSON requests.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// An authenticated session against the Webex REST API.
///
/// The session is immutable after construction and safe to share between
/// concurrent tasks. Per-call headers travel on each [`HttpRequest`]
/// instead of being set on the session.
///
/// # Rate Limiting
///
/// A 429 response is retried after the server's `Retry-After` wait when
/// waiting is enabled, up to the configured number of waits per request.
/// With waiting disabled the first 429 surfaces as [`HttpError::RateLimit`].
/// Other failures are never retried.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use futures::TryStreamExt;
/// use webex_api::{clients::RestSession, AccessToken, WebexConfig};
///
/// let config = WebexConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let session = Arc::new(RestSession::new(&config)?);
///
/// let me = session.get("people/me", None).await?;
/// let rooms: Vec<_> = session.get_items("rooms", None).try_collect().await?;
/// ```
#[derive(Debug)]
pub struct RestSession {
    client: reqwest::Client,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
    policy: RateLimitPolicy,
}

// Verify RestSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestSession>();
};

impl RestSession {
    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxy`] if the proxy URL is rejected and
    /// [`ConfigError::HttpClient`] if the transport cannot be created.
    pub fn new(config: &WebexConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let caller_suffix = config
            .caller()
            .map_or(String::new(), |caller| format!(" | {caller}"));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Webex API Library v{SDK_VERSION} | Rust {rust_version}{caller_suffix}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );
        default_headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);
        if let Some(be_geo_id) = config.be_geo_id() {
            default_headers.insert("X-BEGeo-Id".to_string(), be_geo_id.to_string());
        }
        if let Some(caller) = config.caller() {
            default_headers.insert("X-Webex-Caller".to_string(), caller.to_string());
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.single_request_timeout())
            .danger_accept_invalid_certs(config.disable_ssl_verify());

        if let Some(proxy_url) = config.proxy() {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| ConfigError::InvalidProxy {
                url: proxy_url.to_string(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        let policy = RateLimitPolicy::from_config(config);

        tracing::debug!(
            base_url = %config.base_url(),
            wait_on_rate_limit = policy.waits(),
            max_rate_limit_retries = policy.max_retries(),
            "Created REST session"
        );

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            policy,
        })
    }

    /// Returns the base URL relative paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the rate-limit policy.
    #[must_use]
    pub const fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Resolves a path against the base URL.
    ///
    /// Absolute `http`/`https` URLs, such as pagination links, are used
    /// as-is; anything else is joined beneath the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidUrl`] if the result is not a
    /// valid URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url, InvalidHttpRequestError> {
        let resolved = if path.starts_with("http://") || path.starts_with("https://") {
            Url::parse(path)
        } else {
            self.base_url.as_url().join(path.trim_start_matches('/'))
        };
        resolved.map_err(|e| InvalidHttpRequestError::InvalidUrl {
            url: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Sends a request, waiting out rate limits according to the policy.
    ///
    /// Every attempt re-sends the identical request. The response is only
    /// returned when its status matches the one expected for the method.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Api`] for any unexpected status other than 429
    /// - [`HttpError::RateLimit`] for a 429 when waiting is disabled
    /// - [`HttpError::MaxRetries`] when the wait budget is used up
    /// - [`HttpError::Network`] for transport failures, including timeouts
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path)?;
        let headers = self.merged_headers(request)?;
        let expected = request.expected_status();

        let mut retries: u32 = 0;
        loop {
            tracing::debug!(
                method = %request.http_method,
                %url,
                attempt = retries + 1,
                "Sending request"
            );

            let response = self.send(request, &url, &headers).await?;

            match check_response(&response, expected) {
                ResponseStatus::Success => return Ok(response),
                ResponseStatus::Failed(error) => return Err(error.into()),
                ResponseStatus::RateLimited { retry_after, error } => {
                    match self.policy.decide(retries, retry_after, error) {
                        RateLimitDecision::Wait(delay) => {
                            retries += 1;
                            tracing::warn!(
                                method = %request.http_method,
                                %url,
                                retry_after = delay.as_secs(),
                                attempt = retries,
                                "Rate limited, waiting before retrying"
                            );
                            tokio::time::sleep(delay).await;
                        }
                        RateLimitDecision::Surface(failure) => return Err(failure.into()),
                    }
                }
            }
        }
    }

    /// Sends a GET request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestSession::request`]; additionally returns
    /// [`HttpError::Malformed`] if the body is not JSON.
    pub async fn get(&self, path: &str, params: Option<QueryParams>) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(params.unwrap_or_default())
            .build()?;
        Ok(self.request(&request).await?.json()?)
    }

    /// Sends a POST request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestSession::get`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        params: Option<QueryParams>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .query(params.unwrap_or_default())
            .body(body)
            .headers(headers.unwrap_or_default())
            .build()?;
        Ok(self.request(&request).await?.json()?)
    }

    /// Sends a PUT request and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestSession::get`].
    pub async fn put(&self, path: &str, json: Option<Value>) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(json.map(RequestBody::Json))
            .build()?;
        Ok(self.request(&request).await?.json()?)
    }

    /// Sends a DELETE request; success carries no body.
    ///
    /// # Errors
    ///
    /// See [`RestSession::request`].
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(&request).await?;
        Ok(())
    }

    /// Fetches a single page of a listing.
    ///
    /// # Errors
    ///
    /// See [`RestSession::get`]; additionally returns
    /// [`HttpError::Malformed`] if the body has no `items` array of objects.
    pub async fn get_page(&self, request: &HttpRequest) -> Result<Page, HttpError> {
        let response = self.request(request).await?;
        let page = Page::from_response(&response)?;
        tracing::debug!(
            path = %request.path,
            items = page.items.len(),
            has_next = page.next_url.is_some(),
            "Fetched page"
        );
        Ok(page)
    }

    /// Returns a lazy stream over every item of a paginated listing.
    ///
    /// Pages are fetched one at a time, only when the consumer has used up
    /// the previous one. Dropping the stream stops all further requests.
    pub fn get_items(
        self: &Arc<Self>,
        path: &str,
        params: Option<QueryParams>,
    ) -> BoxStream<'static, Result<JsonObject, HttpError>> {
        self.get_items_with_headers(path, params, HashMap::new())
    }

    /// Like [`RestSession::get_items`], sending `headers` with every page
    /// request of this listing only.
    pub fn get_items_with_headers(
        self: &Arc<Self>,
        path: &str,
        params: Option<QueryParams>,
        headers: HashMap<String, String>,
    ) -> BoxStream<'static, Result<JsonObject, HttpError>> {
        let first = HttpRequest {
            http_method: HttpMethod::Get,
            path: path.to_string(),
            query: params.unwrap_or_default(),
            body: None,
            extra_headers: headers,
        };
        Paginator::new(Arc::clone(self), first).into_stream()
    }

    fn merged_headers(&self, request: &HttpRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = HeaderMap::new();
        let overrides = self.default_headers.iter().chain(request.extra_headers.iter());
        for (name, value) in overrides {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InvalidHttpRequestError::InvalidHeader { name: name.clone() })?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| InvalidHttpRequestError::InvalidHeader { name: name.clone() })?;
            headers.insert(header_name, header_value);
        }

        // The multipart encoder supplies its own boundary-bearing content type.
        if matches!(request.body, Some(RequestBody::Multipart(_))) {
            headers.remove(CONTENT_TYPE);
        }

        Ok(headers)
    }

    async fn send(
        &self,
        request: &HttpRequest,
        url: &Url,
        headers: &HeaderMap,
    ) -> Result<HttpResponse, HttpError> {
        let method = match request.http_method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut req_builder = self
            .client
            .request(method, url.clone())
            .headers(headers.clone());

        if !request.query.is_empty() {
            req_builder = req_builder.query(request.query.as_pairs());
        }

        match &request.body {
            Some(RequestBody::Json(body)) => req_builder = req_builder.json(body),
            Some(RequestBody::Multipart(form)) => req_builder = req_builder.multipart(form.to_form()?),
            None => {}
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let reason = res.status().canonical_reason().map(String::from);
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, reason, res_headers, body))
    }

    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
