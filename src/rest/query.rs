//! Reusable listing queries.
//!
//! A [`ListQuery`] is a value: the listing path, its fully resolved query
//! parameters, any per-call headers and the record mapping. Every call to
//! [`ListQuery::stream`] starts a brand new pagination run from page one,
//! so a query can be iterated any number of times, including concurrently,
//! without the runs sharing a cursor.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use webex_api::rest::resources::RoomListParams;
//!
//! let rooms = api.rooms().list(&RoomListParams::default())?;
//!
//! // Full listing
//! let all = rooms.collect_all().await?;
//!
//! // Same query again, but only the first ten rooms. The first page is
//! // requested with `max=10` unless `max` was already set.
//! let first_ten: Vec<_> = rooms.take(10).try_collect().await?;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::clients::{HttpError, QueryParams, RestSession};
use crate::models::JsonObject;

/// Name of the page-size query parameter.
pub const PAGE_SIZE_PARAM: &str = "max";

/// A reusable, lazily evaluated listing.
pub struct ListQuery<T> {
    session: Arc<RestSession>,
    name: &'static str,
    path: String,
    params: QueryParams,
    headers: HashMap<String, String>,
    mapper: fn(JsonObject) -> T,
}

impl<T> ListQuery<T> {
    /// Binds a listing.
    ///
    /// `name` identifies the listing in `Display` output; `mapper` turns
    /// each raw item into the caller's record type.
    #[must_use]
    pub fn new(
        session: Arc<RestSession>,
        name: &'static str,
        path: impl Into<String>,
        params: QueryParams,
        mapper: fn(JsonObject) -> T,
    ) -> Self {
        Self {
            session,
            name,
            path: path.into(),
            params,
            headers: HashMap::new(),
            mapper,
        }
    }

    /// Binds headers that are sent with every page request of every run.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the listing name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the listing path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the bound query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the bound per-call headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl<T: Send + 'static> ListQuery<T> {
    /// Starts a fresh run over every item, beginning at page one.
    pub fn stream(&self) -> BoxStream<'static, Result<T, HttpError>> {
        self.run(self.params.clone())
    }

    /// Fetches every item into memory.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while fetching any page.
    pub async fn collect_all(&self) -> Result<Vec<T>, HttpError> {
        self.stream().try_collect().await
    }

    /// Fetches only the first item, requesting a single-item page.
    ///
    /// # Errors
    ///
    /// Returns the error raised while fetching the first page.
    pub async fn first(&self) -> Result<Option<T>, HttpError> {
        self.take(1).try_next().await
    }

    /// Starts a fresh run yielding at most `count` items.
    ///
    /// See [`ListQuery::slice`] for the page-size behavior.
    pub fn take(&self, count: usize) -> BoxStream<'static, Result<T, HttpError>> {
        self.slice(0..count)
    }

    /// Starts a fresh run yielding the items at positions `range`.
    ///
    /// When the bound parameters do not set `max`, the first page is
    /// requested with `max` equal to `range.end`, so a short prefix can be
    /// served by a single request. An explicit `max` is left alone. An
    /// empty range issues no request.
    pub fn slice(&self, range: Range<usize>) -> BoxStream<'static, Result<T, HttpError>> {
        if range.is_empty() {
            return stream::empty().boxed();
        }

        let mut params = self.params.clone();
        params.set_default(PAGE_SIZE_PARAM, range.end);

        let start = range.start;
        let mut position = 0usize;
        self.run(params)
            .filter(move |item| {
                let keep = match item {
                    Ok(_) => {
                        position += 1;
                        position > start
                    }
                    Err(_) => true,
                };
                future::ready(keep)
            })
            .take(range.len())
            .boxed()
    }

    fn run(&self, params: QueryParams) -> BoxStream<'static, Result<T, HttpError>> {
        let mapper = self.mapper;
        self.session
            .get_items_with_headers(&self.path, Some(params), self.headers.clone())
            .map_ok(mapper)
            .boxed()
    }
}

impl<T> Clone for ListQuery<T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            name: self.name,
            path: self.path.clone(),
            params: self.params.clone(),
            headers: self.headers.clone(),
            mapper: self.mapper,
        }
    }
}

impl<T> fmt::Debug for ListQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for ListQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListQuery {}({})", self.name, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, WebexConfig};

    fn create_test_query() -> ListQuery<JsonObject> {
        let config = WebexConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .build()
            .unwrap();
        let session = Arc::new(RestSession::new(&config).unwrap());

        let mut params = QueryParams::new();
        params.insert("teamId", "t1");
        params.insert("max", 100);
        ListQuery::new(session, "rooms", "rooms", params, |item| item)
    }

    #[test]
    fn test_display_lists_bound_params() {
        assert_eq!(
            create_test_query().to_string(),
            "ListQuery rooms(teamId=t1, max=100)"
        );
    }

    #[test]
    fn test_with_headers_binds_headers() {
        let mut headers = HashMap::new();
        headers.insert("timezone".to_string(), "UTC".to_string());

        let query = create_test_query().with_headers(headers);
        assert_eq!(query.headers().get("timezone"), Some(&"UTC".to_string()));
        assert_eq!(query.path(), "rooms");
        assert_eq!(query.params().get("max"), Some("100"));
    }

    #[test]
    fn test_debug_hides_header_values() {
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret".to_string());

        let debug = format!("{:?}", create_test_query().with_headers(headers));
        assert!(debug.contains("Authorization"));
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn test_empty_slice_issues_no_request() {
        let items: Vec<_> = create_test_query().slice(3..3).collect().await;
        assert!(items.is_empty());
    }
}
