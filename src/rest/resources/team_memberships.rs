//! Team memberships resource.

use serde::Serialize;

use crate::models::{JsonObject, TeamMembership};
use crate::rest::resource::{Deletable, WebexResource};

/// The `team/memberships` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct TeamMemberships;

impl WebexResource for TeamMemberships {
    type Record = TeamMembership;
    type ListParams = TeamMembershipListParams;
    type CreateParams = TeamMembershipCreateParams;
    type UpdateParams = TeamMembershipUpdateParams;

    const NAME: &'static str = "team_memberships";
    const PATH: &'static str = "team/memberships";
    const DEFAULT_MAX: Option<u32> = Some(100);
}

impl Deletable for TeamMemberships {}

/// Parameters for listing the members of a team.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipListParams {
    /// The team to list; required by the API.
    pub team_id: String,
    /// Page size; defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl TeamMembershipListParams {
    /// Lists the members of `team_id`.
    #[must_use]
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            ..Self::default()
        }
    }
}

/// Fields for adding someone to a team.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipCreateParams {
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    pub is_moderator: bool,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for updating a team membership.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}
