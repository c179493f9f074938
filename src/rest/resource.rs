//! Generic resource wrapper for Webex CRUD endpoints.
//!
//! Most Webex resources share one shape: a collection at `{path}` that is
//! listed with GET and created with POST, and items at `{path}/{id}` that
//! are fetched with GET, updated with PUT and removed with DELETE. The
//! [`WebexResource`] trait describes one such resource; [`ResourceApi`]
//! provides the operations for any of them.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use serde::Serialize;
//! use webex_api::models::Team;
//! use webex_api::rest::WebexResource;
//!
//! pub struct Teams;
//!
//! impl WebexResource for Teams {
//!     type Record = Team;
//!     type ListParams = TeamListParams;
//!     type CreateParams = TeamCreateParams;
//!     type UpdateParams = TeamUpdateParams;
//!
//!     const NAME: &'static str = "teams";
//!     const PATH: &'static str = "teams";
//!     const DEFAULT_MAX: Option<u32> = Some(100);
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use serde::Serialize;
use serde_json::Value;

use crate::clients::{
    HttpError, InvalidHttpRequestError, MalformedResponseError, QueryParams, RequestBody,
    RestSession,
};
use crate::models::{JsonObject, ModelFactory, Record, TypedModels};
use crate::rest::query::{ListQuery, PAGE_SIZE_PARAM};

/// The record a resource call returns under the model strategy `M`.
pub type Output<R, M> = <M as ModelFactory>::Output<<R as WebexResource>::Record>;

/// Describes one Webex CRUD resource.
pub trait WebexResource: Send + Sync + 'static {
    /// The typed record for items of this resource.
    type Record: Record;
    /// Query parameters accepted by `list`.
    type ListParams: Serialize + Send + Sync;
    /// Body fields accepted by `create`.
    type CreateParams: Serialize + Send + Sync;
    /// Body fields accepted by `update`.
    type UpdateParams: Serialize + Send + Sync;

    /// The listing name used in `Display` output.
    const NAME: &'static str;

    /// The collection path, relative to the base URL.
    const PATH: &'static str;

    /// The page size requested when the caller does not set `max`.
    const DEFAULT_MAX: Option<u32> = None;

    /// Builds the body of a create request.
    ///
    /// The returned future may suspend, for example to read a local file.
    ///
    /// # Errors
    ///
    /// Resolves to [`HttpError::InvalidRequest`] if the parameters cannot
    /// be turned into a request body.
    fn create_body(params: &Self::CreateParams) -> BoxFuture<'_, Result<RequestBody, HttpError>> {
        let body = json_object(params, "params")
            .map(|fields| RequestBody::Json(Value::Object(fields)))
            .map_err(HttpError::from);
        Box::pin(future::ready(body))
    }
}

/// A [`WebexResource`] whose items can be deleted by ID.
///
/// Endpoints without a DELETE operation do not implement it, so calling
/// `delete` on them does not compile:
///
/// ```compile_fail
/// # async fn remove(api: webex_api::WebexApi) {
/// api.events().delete("Y2lzY29zcGFyazovL3VzL0VWRU5U").await;
/// # }
/// ```
pub trait Deletable: WebexResource {}

/// Parameters of an operation an endpoint does not offer.
///
/// The type has no values, so the matching [`ResourceApi`] method can
/// never be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unsupported {}

/// CRUD operations for a [`WebexResource`].
///
/// Cheap to clone; every clone shares the same session.
pub struct ResourceApi<R, M = TypedModels> {
    session: Arc<RestSession>,
    _marker: PhantomData<fn() -> (R, M)>,
}

impl<R: WebexResource, M: ModelFactory> ResourceApi<R, M> {
    /// Creates a wrapper over a shared session.
    #[must_use]
    pub const fn new(session: Arc<RestSession>) -> Self {
        Self {
            session,
            _marker: PhantomData,
        }
    }

    /// Returns the session this wrapper issues requests through.
    #[must_use]
    pub const fn session(&self) -> &Arc<RestSession> {
        &self.session
    }

    /// Binds a reusable listing query.
    ///
    /// No request is made until the query is iterated.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the parameters do not
    /// serialize to a query string.
    pub fn list(&self, params: &R::ListParams) -> Result<ListQuery<Output<R, M>>, HttpError> {
        self.list_at(R::PATH, params, R::DEFAULT_MAX)
    }

    /// Like [`ResourceApi::list`], sending `headers` with every page request.
    ///
    /// # Errors
    ///
    /// See [`ResourceApi::list`].
    pub fn list_with_headers(
        &self,
        params: &R::ListParams,
        headers: HashMap<String, String>,
    ) -> Result<ListQuery<Output<R, M>>, HttpError> {
        Ok(self.list(params)?.with_headers(headers))
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn create(&self, params: &R::CreateParams) -> Result<Output<R, M>, HttpError> {
        let body = R::create_body(params).await?;
        let json = self.session.post(R::PATH, Some(body), None, None).await?;
        Self::build(json)
    }

    /// Fetches an item by ID.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn get(&self, id: &str) -> Result<Output<R, M>, HttpError> {
        let json = self.session.get(&item_path(R::PATH, id)?, None).await?;
        Self::build(json)
    }

    /// Updates an item by ID.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn update(
        &self,
        id: &str,
        params: &R::UpdateParams,
    ) -> Result<Output<R, M>, HttpError> {
        let body = json_object(params, "params")?;
        let json = self
            .session
            .put(&item_path(R::PATH, id)?, Some(Value::Object(body)))
            .await?;
        Self::build(json)
    }

    pub(crate) fn list_at<P: Serialize>(
        &self,
        path: &str,
        params: &P,
        default_max: Option<u32>,
    ) -> Result<ListQuery<Output<R, M>>, HttpError> {
        let mut query = QueryParams::from_serializable(params)?;
        if let Some(max) = default_max {
            query.set_default(PAGE_SIZE_PARAM, max);
        }
        Ok(ListQuery::new(
            Arc::clone(&self.session),
            R::NAME,
            path,
            query,
            M::build::<R::Record>,
        ))
    }

    pub(crate) fn build(json: Value) -> Result<Output<R, M>, HttpError> {
        build_record::<R::Record, M>(json)
    }
}

impl<R: Deletable, M: ModelFactory> ResourceApi<R, M> {
    /// Deletes an item by ID.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] raised by the request.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        self.session.delete(&item_path(R::PATH, id)?).await
    }
}

impl<R, M> Clone for ResourceApi<R, M> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            _marker: PhantomData,
        }
    }
}

impl<R: WebexResource, M> fmt::Debug for ResourceApi<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceApi")
            .field("resource", &R::NAME)
            .finish_non_exhaustive()
    }
}

/// Maps a single-object response body through a model strategy.
pub(crate) fn build_record<Rec: Record, M: ModelFactory>(
    json: Value,
) -> Result<M::Output<Rec>, HttpError> {
    match json {
        Value::Object(object) => Ok(M::build::<Rec>(object)),
        other => Err(MalformedResponseError {
            status_code: 200,
            reason: format!("expected a JSON object for a {}, got {other}", Rec::MODEL),
        }
        .into()),
    }
}

/// Serializes parameters into a JSON object, dropping `null` fields.
pub(crate) fn json_object<P: Serialize>(
    params: &P,
    name: &'static str,
) -> Result<JsonObject, InvalidHttpRequestError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(mut object)) => {
            object.retain(|_, value| !value.is_null());
            Ok(object)
        }
        Ok(_) => Err(InvalidHttpRequestError::InvalidArgument {
            name,
            reason: "expected fields that serialize to a JSON object".to_string(),
        }),
        Err(e) => Err(InvalidHttpRequestError::InvalidArgument {
            name,
            reason: e.to_string(),
        }),
    }
}

/// Builds `{collection}/{id}`, rejecting an empty ID.
pub(crate) fn item_path(collection: &str, id: &str) -> Result<String, InvalidHttpRequestError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(InvalidHttpRequestError::InvalidArgument {
            name: "id",
            reason: "an item ID cannot be empty".to_string(),
        });
    }
    Ok(format!("{collection}/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawModels, Room};
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        title: Option<String>,
        team_id: Option<String>,
    }

    #[test]
    fn test_json_object_drops_nulls() {
        let object = json_object(
            &Params {
                title: Some("T".to_string()),
                team_id: None,
            },
            "params",
        )
        .unwrap();

        assert_eq!(Value::Object(object), json!({"title": "T"}));
    }

    #[test]
    fn test_json_object_rejects_non_objects() {
        assert!(json_object(&"text", "params").is_err());
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("rooms", "abc").unwrap(), "rooms/abc");
        assert!(item_path("rooms", "  ").is_err());
    }

    #[test]
    fn test_unsupported_params_serialize_as_nothing() {
        let none: Option<Unsupported> = None;
        assert_eq!(serde_json::to_value(none).unwrap(), Value::Null);
    }

    #[test]
    fn test_build_record_requires_object() {
        let room = build_record::<Room, TypedModels>(json!({"id": "r1"})).unwrap();
        assert_eq!(room.id(), Some("r1"));

        let raw = build_record::<Room, RawModels>(json!({"id": "r1"})).unwrap();
        assert_eq!(raw.get("id"), Some(&json!("r1")));

        let error = build_record::<Room, TypedModels>(json!([1, 2])).unwrap_err();
        assert!(matches!(error, HttpError::Malformed(_)));
    }
}
