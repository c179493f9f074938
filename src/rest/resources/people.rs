//! People resource.
//!
//! Lists, fetches and administers Webex users. Creating, updating and
//! deleting people requires administrator privileges.

use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpError;
use crate::models::{JsonObject, ModelFactory, Person};
use crate::rest::resource::{Deletable, Output, ResourceApi, WebexResource};

/// The `people` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct People;

impl WebexResource for People {
    type Record = Person;
    type ListParams = PersonListParams;
    type CreateParams = PersonParams;
    type UpdateParams = PersonParams;

    const NAME: &'static str = "people";
    const PATH: &'static str = "people";
}

impl Deletable for People {}

/// Parameters for listing people.
///
/// The API requires at least one of `email`, `display_name` or `id`
/// unless the caller is an administrator.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// A comma-separated list of person IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for creating or updating a person.
///
/// An update replaces the person's details, so send every field that
/// should be kept.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub site_urls: Vec<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl<M: ModelFactory> ResourceApi<People, M> {
    /// Fetches the person who owns the access token.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn me(&self) -> Result<Output<People, M>, HttpError> {
        let json = self.session().get("people/me", None).await?;
        Self::build(json)
    }
}
