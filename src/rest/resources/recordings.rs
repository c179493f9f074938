//! Recordings resource.
//!
//! Lists, fetches and deletes meeting recordings. Recordings are created
//! by the meeting service, never through the API. Admins reach another
//! host's recordings by scoping a call with [`RecordingScopeParams`].

use serde::Serialize;

use crate::clients::{HttpError, HttpMethod, HttpRequest, QueryParams};
use crate::models::{JsonObject, ModelFactory, Recording};
use crate::rest::resource::{item_path, Deletable, Output, ResourceApi, Unsupported, WebexResource};

/// The `recordings` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Recordings;

impl WebexResource for Recordings {
    type Record = Recording;
    type ListParams = RecordingListParams;
    type CreateParams = Unsupported;
    type UpdateParams = Unsupported;

    const NAME: &'static str = "recordings";
    const PATH: &'static str = "recordings";
}

impl Deletable for Recordings {}

/// Parameters for listing recordings.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Start of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the date range, in ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// `MP4`, `ARF` or `UPLOADED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Scopes a single-recording call to a site or host.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordingScopeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
}

impl<M: ModelFactory> ResourceApi<Recordings, M> {
    /// Fetches a recording within a site or host scope.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn get_scoped(
        &self,
        id: &str,
        scope: &RecordingScopeParams,
    ) -> Result<Output<Recordings, M>, HttpError> {
        let path = item_path(Recordings::PATH, id)?;
        let query = QueryParams::from_serializable(scope)?;
        let json = self.session().get(&path, Some(query)).await?;
        Self::build(json)
    }

    /// Deletes a recording within a site or host scope.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn delete_scoped(
        &self,
        id: &str,
        scope: &RecordingScopeParams,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, item_path(Recordings::PATH, id)?)
            .query(QueryParams::from_serializable(scope)?)
            .build()?;
        self.session().request(&request).await?;
        Ok(())
    }
}
