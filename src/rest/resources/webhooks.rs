//! Webhooks resource.
//!
//! Webhooks notify an application over HTTP when a resource event
//! happens, such as a message being created in a room.

use serde::Serialize;

use crate::models::{JsonObject, Webhook};
use crate::rest::resource::{Deletable, WebexResource};

/// The `webhooks` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks;

impl WebexResource for Webhooks {
    type Record = Webhook;
    type ListParams = WebhookListParams;
    type CreateParams = WebhookCreateParams;
    type UpdateParams = WebhookUpdateParams;

    const NAME: &'static str = "webhooks";
    const PATH: &'static str = "webhooks";
    const DEFAULT_MAX: Option<u32> = Some(100);
}

impl Deletable for Webhooks {}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WebhookListParams {
    /// Page size; defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for creating a webhook.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreateParams {
    /// A user-friendly name for the webhook.
    pub name: String,
    /// The URL that receives POST requests for each event.
    pub target_url: String,
    /// The resource type, e.g. `messages`.
    pub resource: String,
    /// The event type, e.g. `created`.
    pub event: String,
    /// Filters the events, e.g. `roomId=...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Secret used to generate payload signatures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for updating a webhook.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}
