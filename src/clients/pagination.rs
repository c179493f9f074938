//! Pagination over Webex listing endpoints.
//!
//! Webex list responses carry an `items` array and, when more results
//! exist, a `Link: <url>; rel="next"` header. [`Paginator`] follows those
//! links and flattens every page into a single lazy stream of items.
//!
//! # State Machine
//!
//! ```text
//!   Fetching --page--> Yielding --items exhausted, next link--> Fetching
//!                          |
//!                          +----items exhausted, no link-----> Done
//! ```
//!
//! A page is requested only when the consumer asks for an item and the
//! previous page has been fully handed out; nothing is prefetched. An
//! error while fetching is returned as the next item and ends the stream;
//! items already yielded stay yielded.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;

use crate::clients::errors::{HttpError, MalformedResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, QueryParams};
use crate::clients::http_response::HttpResponse;
use crate::clients::session::RestSession;
use crate::models::JsonObject;

/// One page of a listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// The items of this page, in server order.
    pub items: Vec<JsonObject>,
    /// The absolute URL of the next page; `None` on the last page.
    pub next_url: Option<String>,
}

impl Page {
    /// Extracts a page from a successful listing response.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedResponseError`] if the body is not JSON, has no
    /// `items` array, or contains an item that is not an object.
    pub fn from_response(response: &HttpResponse) -> Result<Self, MalformedResponseError> {
        let malformed = |reason: &str| MalformedResponseError {
            status_code: response.code,
            reason: reason.to_string(),
        };

        let Value::Object(mut body) = response.json()? else {
            return Err(malformed("listing response is not a JSON object"));
        };

        let Some(Value::Array(raw_items)) = body.remove("items") else {
            return Err(malformed("listing response has no 'items' array"));
        };

        let items = raw_items
            .into_iter()
            .map(|item| match item {
                Value::Object(object) => Ok(object),
                _ => Err(malformed("listing item is not a JSON object")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            items,
            next_url: response.next_url().map(String::from),
        })
    }

    /// Returns `true` if this is the last page.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next_url.is_none()
    }
}

enum State {
    Fetching(HttpRequest),
    Yielding {
        items: VecDeque<JsonObject>,
        next_url: Option<String>,
    },
    Done,
}

/// Drives one paginated listing from its first request to its last page.
///
/// A `Paginator` is single-use: [`Paginator::into_stream`] consumes it.
/// Build a new one to start over from page one.
#[derive(Debug)]
pub struct Paginator {
    session: Arc<RestSession>,
    first: HttpRequest,
}

impl Paginator {
    /// Creates a paginator starting at `first`.
    ///
    /// The headers of `first` are carried over to every following page.
    #[must_use]
    pub const fn new(session: Arc<RestSession>, first: HttpRequest) -> Self {
        Self { session, first }
    }

    /// Turns the paginator into a lazy stream of items.
    pub fn into_stream(self) -> BoxStream<'static, Result<JsonObject, HttpError>> {
        let Self { session, first } = self;
        let headers = first.extra_headers.clone();

        stream::try_unfold(State::Fetching(first), move |state| {
            let session = Arc::clone(&session);
            let headers = headers.clone();
            async move { advance(&session, state, &headers).await }
        })
        .boxed()
    }
}

async fn advance(
    session: &RestSession,
    mut state: State,
    headers: &HashMap<String, String>,
) -> Result<Option<(JsonObject, State)>, HttpError> {
    loop {
        state = match state {
            State::Done => return Ok(None),
            State::Yielding {
                mut items,
                next_url,
            } => {
                if let Some(item) = items.pop_front() {
                    return Ok(Some((item, State::Yielding { items, next_url })));
                }
                match next_url {
                    Some(url) => State::Fetching(next_page_request(url, headers)),
                    None => State::Done,
                }
            }
            State::Fetching(request) => {
                let page = session.get_page(&request).await?;
                State::Yielding {
                    items: page.items.into(),
                    next_url: page.next_url,
                }
            }
        };
    }
}

fn next_page_request(url: String, headers: &HashMap<String, String>) -> HttpRequest {
    HttpRequest {
        http_method: HttpMethod::Get,
        path: url,
        query: QueryParams::new(),
        body: None,
        extra_headers: headers.clone(),
    }
}
