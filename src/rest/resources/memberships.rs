//! Memberships resource: people's membership in rooms.

use serde::Serialize;

use crate::models::{JsonObject, Membership};
use crate::rest::resource::{Deletable, WebexResource};

/// The `memberships` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Memberships;

impl WebexResource for Memberships {
    type Record = Membership;
    type ListParams = MembershipListParams;
    type CreateParams = MembershipCreateParams;
    type UpdateParams = MembershipUpdateParams;

    const NAME: &'static str = "memberships";
    const PATH: &'static str = "memberships";
}

impl Deletable for Memberships {}

/// Parameters for listing memberships.
///
/// Without a room filter the listing returns the caller's own memberships.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for adding someone to a room.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipCreateParams {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    pub is_moderator: bool,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for updating a membership.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembershipUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}
