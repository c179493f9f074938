//! Events resource.
//!
//! Compliance officers read the events of their organization: messages
//! and memberships being created, updated or deleted. Events are
//! read-only; they can be listed and fetched, nothing else.

use serde::Serialize;

use crate::models::{Event, JsonObject};
use crate::rest::resource::{Unsupported, WebexResource};

/// The `events` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Events;

impl WebexResource for Events {
    type Record = Event;
    type ListParams = EventListParams;
    type CreateParams = Unsupported;
    type UpdateParams = Unsupported;

    const NAME: &'static str = "events";
    const PATH: &'static str = "events";
}

/// Parameters for listing events.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventListParams {
    /// The resource type, e.g. `messages` or `memberships`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// The action, e.g. `created`, `updated` or `deleted`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Only events caused by this person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    /// Start of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}
