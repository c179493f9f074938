//! REST resource layer for the Webex API.
//!
//! This module turns the session's raw verbs into resource operations:
//!
//! - **[`ListQuery<T>`]**: A reusable, lazily paginated listing; every
//!   iteration starts again from page one with the bound parameters
//! - **[`WebexResource`] trait**: Describes a CRUD endpoint (path, record
//!   type, parameter types, default page size)
//! - **[`ResourceApi<R, M>`]**: `list`, `create`, `get`, `update` and
//!   `delete` for any [`WebexResource`], with results mapped through the
//!   model strategy `M`; `delete` only where the resource is [`Deletable`],
//!   and operations whose parameter type is [`Unsupported`] cannot be called
//! - **[`resources`]**: The Webex endpoints themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use webex_api::rest::resources::{MembershipListParams, RoomListParams};
//!
//! let rooms = api.rooms().list(&RoomListParams::default())?;
//! println!("{rooms}"); // ListQuery rooms(max=100)
//!
//! let mut stream = rooms.stream();
//! while let Some(room) = stream.try_next().await? {
//!     let members = api.memberships().list(&MembershipListParams {
//!         room_id: room.id().map(String::from),
//!         ..Default::default()
//!     })?;
//!     println!("{}: {} members", room.title().unwrap_or_default(), members.collect_all().await?.len());
//! }
//! ```

mod query;
mod resource;
pub mod resources;

pub use query::{ListQuery, PAGE_SIZE_PARAM};
pub use resource::{Deletable, Output, ResourceApi, Unsupported, WebexResource};
