//! Attachment actions resource.
//!
//! An attachment action is a person's submission of a card (for example
//! an adaptive card) posted in a message. Actions are created and fetched
//! individually; the API offers no listing.

use serde::Serialize;

use crate::models::{AttachmentAction, JsonObject};
use crate::rest::resource::{Unsupported, WebexResource};

/// The `attachment/actions` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentActions;

impl WebexResource for AttachmentActions {
    type Record = AttachmentAction;
    type ListParams = Unsupported;
    type CreateParams = AttachmentActionCreateParams;
    type UpdateParams = Unsupported;

    const NAME: &'static str = "attachment_actions";
    const PATH: &'static str = "attachment/actions";
}

/// Fields for submitting a card.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentActionCreateParams {
    /// The action type; the API accepts `submit`.
    #[serde(rename = "type")]
    pub action_type: String,
    /// The message the card is attached to.
    pub message_id: String,
    /// The card inputs, keyed by input ID.
    pub inputs: JsonObject,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl AttachmentActionCreateParams {
    /// Submits `inputs` for the card on `message_id`.
    #[must_use]
    pub fn submit(message_id: impl Into<String>, inputs: JsonObject) -> Self {
        Self {
            action_type: "submit".to_string(),
            message_id: message_id.into(),
            inputs,
            extra: JsonObject::new(),
        }
    }
}
