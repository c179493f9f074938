//! Meetings resource.
//!
//! Schedules, lists and manages Webex meetings. A listing returns meeting
//! series by default; filter with `meeting_type` for scheduled meetings or
//! past meeting instances. Listing accepts per-call headers (for example a
//! `timezone` header) through [`ResourceApi::list_with_headers`].
//!
//! [`ResourceApi::list_with_headers`]: crate::rest::ResourceApi::list_with_headers

use serde::Serialize;
use serde_json::Value;

use crate::models::{JsonObject, Meeting};
use crate::rest::resource::{Deletable, WebexResource};

/// The `meetings` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Meetings;

impl WebexResource for Meetings {
    type Record = Meeting;
    type ListParams = MeetingListParams;
    type CreateParams = MeetingCreateParams;
    type UpdateParams = MeetingUpdateParams;

    const NAME: &'static str = "meetings";
    const PATH: &'static str = "meetings";
}

impl Deletable for Meetings {}

/// Parameters for listing meetings.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// `meetingSeries`, `scheduledMeeting` or `meeting`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_email: Option<String>,
    /// Only the current scheduled meeting of each series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    /// Start of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// List on behalf of this host; requires an admin token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_tag: Option<String>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for scheduling a meeting.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCreateParams {
    pub title: String,
    /// Start time, in ISO 8601.
    pub start: String,
    /// End time, in ISO 8601.
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// An RFC 2445 recurrence rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_auto_record_meeting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_any_user_to_be_co_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_join_before_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_before_host_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_meeting: Option<bool>,
    /// `meeting`, `webinar` or `personalRoomMeeting`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_type: Option<String>,
    /// Invitee objects, each with at least an `email`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invitees: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub integration_tags: Vec<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for editing a meeting.
///
/// The API replaces the meeting, so title, password and times are required.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingUpdateParams {
    pub title: String,
    pub password: String,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::QueryParams;

    #[test]
    fn test_list_params_use_api_names() {
        let params = QueryParams::from_serializable(&MeetingListParams {
            meeting_type: Some("scheduledMeeting".to_string()),
            from: Some("2026-01-01T00:00:00Z".to_string()),
            current: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            params.to_string(),
            "meetingType=scheduledMeeting, current=true, from=2026-01-01T00:00:00Z"
        );
    }
}
