//! # Webex API Rust SDK
//!
//! An async Rust client for the Webex REST API, providing type-safe
//! configuration, a resilient HTTP session and lazily paginated resource
//! listings.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WebexConfig`] and [`WebexConfigBuilder`]
//! - A REST session that validates every response and waits out rate
//!   limits ([`clients::RestSession`])
//! - Lazy pagination that follows `Link: rel="next"` headers one page at a
//!   time ([`clients::Paginator`])
//! - Reusable listing queries that restart from page one on every
//!   iteration ([`rest::ListQuery`])
//! - Resource wrappers for rooms, messages, memberships, teams, team
//!   memberships, people, webhooks, meeting invitees and guest tokens
//! - Pluggable model strategies: typed records, raw JSON, or simple records
//!   ([`models`])
//!
//! ## Quick Start
//!
//! ```rust
//! use webex_api::{AccessToken, WebexConfig};
//!
//! let config = WebexConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .max_rate_limit_retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().to_string(), "https://webexapis.com/v1/");
//! ```
//!
//! ## Listing Resources
//!
//! Listings are lazy. Nothing is requested until the stream is polled, and
//! a page is fetched only when the previous one has been consumed:
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use webex_api::WebexApi;
//! use webex_api::rest::resources::RoomListParams;
//!
//! let api = WebexApi::from_env()?;
//!
//! let rooms = api.rooms().list(&RoomListParams {
//!     room_type: Some("group".to_string()),
//!     ..Default::default()
//! })?;
//!
//! // Stops after the page holding the tenth room
//! let first_ten: Vec<_> = rooms.take(10).try_collect().await?;
//!
//! // Iterating again starts a fresh listing
//! let everything = rooms.collect_all().await?;
//! ```
//!
//! ## Creating and Updating
//!
//! ```rust,ignore
//! use webex_api::rest::resources::{MessageCreateParams, RoomCreateParams};
//!
//! let room = api.rooms().create(&RoomCreateParams::new("Release planning")).await?;
//! let room_id = room.id().unwrap_or_default().to_string();
//!
//! api.messages()
//!     .create(&MessageCreateParams {
//!         room_id: Some(room_id),
//!         markdown: Some("Kickoff at **10:00**".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns [`HttpError`]. Unexpected statuses carry the
//! server's message and tracking ID:
//!
//! ```rust,ignore
//! use webex_api::HttpError;
//!
//! match api.rooms().get("missing").await {
//!     Err(HttpError::Api(e)) => {
//!         eprintln!("{}: {:?} (tracking {:?})", e.status_code, e.message, e.tracking_id);
//!     }
//!     Err(HttpError::RateLimit(e)) => eprintln!("retry in {}s", e.retry_after),
//!     Err(e) => eprintln!("{e}"),
//!     Ok(room) => println!("{room}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Lazy and restartable**: Listings fetch on demand and can be re-run

mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::WebexApi;
pub use config::{AccessToken, BaseUrl, WebexConfig, WebexConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, MalformedResponseError, MaxRateLimitRetriesError, QueryParams,
    RateLimitError, RestSession,
};

// Re-export the listing and model types most callers touch
pub use models::{JsonObject, RawModels, Record, SimpleModels, SimpleRecord, TypedModels};
pub use rest::{Deletable, ListQuery, ResourceApi, Unsupported, WebexResource};
