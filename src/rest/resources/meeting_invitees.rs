//! Meeting invitees resource.
//!
//! Lists and manages the people invited to a meeting. Listing accepts
//! per-call headers (for example a `timezone` header) through
//! [`ResourceApi::list_with_headers`]; they are sent with every page
//! request of that listing and nowhere else.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpError, MalformedResponseError};
use crate::models::{JsonObject, MeetingInvitee, ModelFactory};
use crate::rest::resource::{json_object, Deletable, Output, ResourceApi, WebexResource};

/// The `meetingInvitees` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct MeetingInvitees;

impl WebexResource for MeetingInvitees {
    type Record = MeetingInvitee;
    type ListParams = MeetingInviteeListParams;
    type CreateParams = MeetingInviteeParams;
    type UpdateParams = MeetingInviteeParams;

    const NAME: &'static str = "meeting_invitees";
    const PATH: &'static str = "meetingInvitees";
}

impl Deletable for MeetingInvitees {}

/// Parameters for listing the invitees of a meeting.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInviteeListParams {
    /// The meeting to list; required by the API.
    pub meeting_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// List on behalf of this host; requires an admin token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// Only list panelists, or only non-panelists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panelist: Option<bool>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl MeetingInviteeListParams {
    /// Lists the invitees of `meeting_id`.
    #[must_use]
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            ..Self::default()
        }
    }
}

/// Fields for inviting someone to a meeting, or changing an invitation.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInviteeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panelist: Option<bool>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for inviting several people at once.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BulkInviteeParams {
    pub meeting_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// The invitees; `meeting_id` may be left empty on each of them.
    pub items: Vec<MeetingInviteeParams>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl<M: ModelFactory> ResourceApi<MeetingInvitees, M> {
    /// Invites several people to a meeting in one request.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request, or
    /// [`HttpError::Malformed`] if the response has no `items` array.
    pub async fn bulk(
        &self,
        params: &BulkInviteeParams,
    ) -> Result<Vec<Output<MeetingInvitees, M>>, HttpError> {
        let body = json_object(params, "params")?;
        let path = format!("{}/bulkInsert", MeetingInvitees::PATH);
        let json = self.session().put(&path, Some(Value::Object(body))).await?;

        let Some(Value::Array(items)) = json.get("items").cloned() else {
            return Err(MalformedResponseError {
                status_code: 200,
                reason: "bulk insert response has no 'items' array".to_string(),
            }
            .into());
        };

        items.into_iter().map(Self::build).collect()
    }
}
