//! Teams resource.

use serde::Serialize;

use crate::models::{JsonObject, Team};
use crate::rest::resource::{Deletable, WebexResource};

/// The `teams` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Teams;

impl WebexResource for Teams {
    type Record = Team;
    type ListParams = TeamListParams;
    type CreateParams = TeamCreateParams;
    type UpdateParams = TeamUpdateParams;

    const NAME: &'static str = "teams";
    const PATH: &'static str = "teams";
    const DEFAULT_MAX: Option<u32> = Some(100);
}

impl Deletable for Teams {}

/// Parameters for listing teams.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TeamListParams {
    /// Page size; defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for creating a team.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TeamCreateParams {
    pub name: String,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for renaming a team.
pub type TeamUpdateParams = TeamCreateParams;
