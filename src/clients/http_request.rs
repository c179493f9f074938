//! HTTP request types for the Webex API SDK.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder,
//! [`QueryParams`] for ordered, pruned query strings, and
//! [`RequestBody`] for JSON and multipart payloads.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Webex API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the status code a successful call with this method returns.
    #[must_use]
    pub const fn expected_status(self) -> u16 {
        match self {
            Self::Get | Self::Post | Self::Put => 200,
            Self::Delete => 204,
        }
    }

    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Ordered query parameters.
///
/// Keys are unique; inserting an existing key replaces its value in place.
/// Absent optional values are pruned rather than serialized.
///
/// # Example
///
/// ```rust
/// use webex_api::clients::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.insert("teamId", "abc");
/// params.insert_opt("type", None::<&str>);
/// params.set_default("max", 100);
/// params.set_default("max", 5);
///
/// assert_eq!(params.get("max"), Some("100"));
/// assert!(!params.contains("type"));
/// assert_eq!(params.to_string(), "teamId=abc, max=100");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds parameters from a serializable struct.
    ///
    /// `null` values are skipped, arrays become comma-separated values and
    /// nested objects are encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidArgument`] if the value
    /// does not serialize to a JSON object.
    pub fn from_serializable<T: Serialize>(params: &T) -> Result<Self, InvalidHttpRequestError> {
        let value = serde_json::to_value(params).map_err(|e| {
            InvalidHttpRequestError::InvalidArgument {
                name: "params",
                reason: e.to_string(),
            }
        })?;

        let Value::Object(map) = value else {
            return Err(InvalidHttpRequestError::InvalidArgument {
                name: "params",
                reason: "query parameters must serialize to an object".to_string(),
            });
        };

        let mut query = Self::new();
        for (key, val) in map {
            if let Some(encoded) = encode_query_value(&val) {
                query.insert(key, encoded);
            }
        }
        Ok(query)
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Inserts a parameter only when a value is present.
    pub fn insert_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Inserts a parameter only when the key is not already set.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        if !self.contains(&key) {
            self.0.push((key, value.to_string()));
        }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the parameter is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Merges another set of parameters, replacing duplicates.
    pub fn extend(&mut self, other: Self) {
        for (key, value) in other.0 {
            self.insert(key, value);
        }
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the parameters as key/value pairs.
    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&rendered.join(", "))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

fn encode_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let values: Vec<String> = items.iter().filter_map(encode_query_value).collect();
            (!values.is_empty()).then(|| values.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// A file attached to a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// The form field name.
    pub field: String,
    /// The file name sent to the server.
    pub file_name: String,
    /// The file contents.
    pub bytes: Vec<u8>,
    /// The MIME type of the file.
    pub content_type: String,
}

/// A multipart form description.
///
/// Kept as plain data so the same form can be rebuilt for every attempt
/// of a retried request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    /// Text fields, in order.
    pub fields: Vec<(String, String)>,
    /// File parts, in order.
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Adds a file part.
    #[must_use]
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    /// Builds a `reqwest` form for one send attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if a file part's content type is not a valid MIME type.
    pub fn to_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        for file in &self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)?;
            form = form.part(file.field.clone(), part);
        }
        Ok(form)
    }
}

/// The body of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(Value),
    /// A multipart form, used for file uploads.
    Multipart(MultipartForm),
}

/// A request descriptor: everything needed to issue one HTTP call.
///
/// `path` is either relative to the session's base URL (`rooms/abc`) or an
/// absolute URL such as a pagination link.
///
/// # Example
///
/// ```rust
/// use webex_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "rooms")
///     .query_param("max", 10)
///     .build()
///     .unwrap();
///
/// let post = HttpRequest::builder(HttpMethod::Post, "rooms")
///     .json(json!({"title": "Project Unicorn"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) or absolute URL.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Headers for this call only; they override session defaults.
    pub extra_headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the status code expected for this request.
    #[must_use]
    pub const fn expected_status(&self) -> u16 {
        self.http_method.expected_status()
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::BodyNotAllowed`] if a GET or
    /// DELETE request carries a body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: QueryParams,
    body: Option<RequestBody>,
    extra_headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
            extra_headers: HashMap::new(),
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a multipart body.
    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Sets an optional body.
    #[must_use]
    pub fn body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    /// Sets all per-call headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Adds a single per-call header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expected_status_per_method() {
        assert_eq!(HttpMethod::Get.expected_status(), 200);
        assert_eq!(HttpMethod::Post.expected_status(), 200);
        assert_eq!(HttpMethod::Put.expected_status(), 200);
        assert_eq!(HttpMethod::Delete.expected_status(), 204);
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_query_params_prune_and_replace() {
        let mut params = QueryParams::new();
        params.insert("roomId", "r1");
        params.insert_opt("personId", None::<String>);
        params.insert("roomId", "r2");
        params.insert_opt("max", Some(50));

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("roomId"), Some("r2"));
        assert_eq!(params.get("max"), Some("50"));
        assert!(!params.contains("personId"));
    }

    #[test]
    fn test_query_params_from_serializable() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            team_id: Option<String>,
            sort_by: Option<String>,
            max: Option<u32>,
            mentioned_people: Vec<String>,
            panelist: Option<bool>,
        }

        let params = QueryParams::from_serializable(&Params {
            team_id: Some("t1".to_string()),
            sort_by: None,
            max: Some(10),
            mentioned_people: vec!["me".to_string(), "p2".to_string()],
            panelist: Some(false),
        })
        .unwrap();

        assert_eq!(params.get("teamId"), Some("t1"));
        assert!(!params.contains("sortBy"));
        assert_eq!(params.get("max"), Some("10"));
        assert_eq!(params.get("mentionedPeople"), Some("me,p2"));
        assert_eq!(params.get("panelist"), Some("false"));
    }

    #[test]
    fn test_query_params_from_non_object_is_rejected() {
        assert!(QueryParams::from_serializable(&42).is_err());
    }

    #[test]
    fn test_builder_creates_valid_requests() {
        let request = HttpRequest::builder(HttpMethod::Get, "rooms")
            .query_param("max", 10)
            .header("X-Custom", "v")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.query.get("max"), Some("10"));
        assert_eq!(request.extra_headers.get("X-Custom"), Some(&"v".to_string()));
        assert!(request.body.is_none());

        let request = HttpRequest::builder(HttpMethod::Post, "rooms")
            .json(json!({"title": "T"}))
            .build()
            .unwrap();
        assert_eq!(request.body, Some(RequestBody::Json(json!({"title": "T"}))));
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        assert!(HttpRequest::builder(HttpMethod::Post, "jwt/login").build().is_ok());
    }

    #[test]
    fn test_body_rejected_for_get_and_delete() {
        let result = HttpRequest::builder(HttpMethod::Get, "rooms")
            .json(json!({}))
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "GET"
        ));

        let result = HttpRequest::builder(HttpMethod::Delete, "rooms/1")
            .json(json!({}))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_multipart_form_builds() {
        let form = MultipartForm::new().text("roomId", "r1").file(FilePart {
            field: "files".to_string(),
            file_name: "hello.txt".to_string(),
            bytes: b"hello".to_vec(),
            content_type: "text/plain".to_string(),
        });

        assert_eq!(form.fields.len(), 1);
        assert!(form.to_form().is_ok());

        let bad = MultipartForm::new().file(FilePart {
            field: "files".to_string(),
            file_name: "x".to_string(),
            bytes: Vec::new(),
            content_type: "not a mime type".to_string(),
        });
        assert!(bad.to_form().is_err());
    }
}
