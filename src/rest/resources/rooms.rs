//! Rooms resource.
//!
//! Rooms are virtual meeting places where people post messages and
//! collaborate.
//!
//! # Example
//!
//! ```rust,ignore
//! use webex_api::rest::resources::{RoomCreateParams, RoomListParams};
//!
//! let rooms = api.rooms();
//!
//! let params = RoomListParams {
//!     room_type: Some("group".to_string()),
//!     sort_by: Some("lastactivity".to_string()),
//!     ..Default::default()
//! };
//! for room in rooms.list(&params)?.collect_all().await? {
//!     println!("{}", room.title().unwrap_or_default());
//! }
//!
//! let created = rooms
//!     .create(&RoomCreateParams::new("Project Unicorn"))
//!     .await?;
//! let info = rooms.get_meeting_info(created.id().unwrap_or_default()).await?;
//! ```

use serde::Serialize;

use crate::clients::HttpError;
use crate::models::{JsonObject, ModelFactory, Room, RoomMeetingInfo};
use crate::rest::resource::{build_record, item_path, Deletable, ResourceApi, WebexResource};

/// The `rooms` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Rooms;

impl WebexResource for Rooms {
    type Record = Room;
    type ListParams = RoomListParams;
    type CreateParams = RoomCreateParams;
    type UpdateParams = RoomUpdateParams;

    const NAME: &'static str = "rooms";
    const PATH: &'static str = "rooms";
    const DEFAULT_MAX: Option<u32> = Some(100);
}

impl Deletable for Rooms {}

/// Parameters for listing rooms.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomListParams {
    /// Limit the rooms to those associated with a team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    /// `direct` or `group`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,

    /// `id`, `lastactivity` or `created`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Page size; defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for creating a room.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreateParams {
    /// A user-friendly name for the room.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_announcement_only: Option<bool>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl RoomCreateParams {
    /// Creates parameters with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Fields for updating a room.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdateParams {
    /// A user-friendly name for the room.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_announcement_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl<M: ModelFactory> ResourceApi<Rooms, M> {
    /// Fetches the meeting details for a room.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn get_meeting_info(
        &self,
        room_id: &str,
    ) -> Result<M::Output<RoomMeetingInfo>, HttpError> {
        let path = format!("{}/meetingInfo", item_path(Rooms::PATH, room_id)?);
        let json = self.session().get(&path, None).await?;
        build_record::<RoomMeetingInfo, M>(json)
    }
}
