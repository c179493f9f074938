//! Messages resource.
//!
//! Messages are posted to rooms or sent directly to a person. A message
//! may carry one attachment: either a public URL, sent as JSON, or a local
//! file, uploaded as multipart form data.
//!
//! # Example
//!
//! ```rust,ignore
//! use webex_api::rest::resources::{MessageCreateParams, MessageListParams};
//!
//! let messages = api.messages();
//!
//! let params = MessageCreateParams {
//!     room_id: Some(room_id.clone()),
//!     markdown: Some("**Build passed**".to_string()),
//!     files: vec!["./report.pdf".to_string()],
//!     ..Default::default()
//! };
//! messages.create(&params).await?;
//!
//! let recent = messages.list(&MessageListParams::new(&room_id))?;
//! let last_five: Vec<_> = recent.take(5).try_collect().await?;
//! ```

use std::path::Path;

use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{FilePart, HttpError, InvalidHttpRequestError, MultipartForm, RequestBody};
use crate::models::{JsonObject, Message, ModelFactory};
use crate::rest::query::ListQuery;
use crate::rest::resource::{json_object, Deletable, Output, ResourceApi, WebexResource};

/// Default content type for uploads whose type cannot be guessed.
pub const DEFAULT_UPLOAD_CONTENT_TYPE: &str = "text/plain";

/// The `messages` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Messages;

impl WebexResource for Messages {
    type Record = Message;
    type ListParams = MessageListParams;
    type CreateParams = MessageCreateParams;
    type UpdateParams = MessageUpdateParams;

    const NAME: &'static str = "messages";
    const PATH: &'static str = "messages";
    const DEFAULT_MAX: Option<u32> = Some(50);

    fn create_body(params: &MessageCreateParams) -> BoxFuture<'_, Result<RequestBody, HttpError>> {
        Box::pin(message_body(params))
    }
}

impl Deletable for Messages {}

/// Builds a JSON body, or a multipart body when a local file is attached.
async fn message_body(params: &MessageCreateParams) -> Result<RequestBody, HttpError> {
    let mut fields = json_object(params, "params")?;

    let local_file = match params.files.as_slice() {
        [] => None,
        [file] if is_web_url(file) => None,
        [file] => Some(file.as_str()),
        files if files.iter().any(|f| !is_web_url(f)) => {
            return Err(InvalidHttpRequestError::InvalidArgument {
                name: "files",
                reason: "only one local file may be attached to a message".to_string(),
            }
            .into());
        }
        _ => None,
    };

    let Some(local_file) = local_file else {
        return Ok(RequestBody::Json(Value::Object(fields)));
    };

    fields.remove("files");
    let mut form = MultipartForm::new();
    for (name, value) in fields {
        let text = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        form = form.text(name, text);
    }

    let file = read_local_file(local_file).await?;
    Ok(RequestBody::Multipart(form.file(file)))
}

/// Parameters for listing the messages of a room.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageListParams {
    /// The room to list; required by the API.
    pub room_id: String,
    /// Only list replies to this parent message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Only list messages mentioning these people; `me` is accepted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned_people: Vec<String>,
    /// Only list messages sent before this ISO 8601 time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Only list messages sent before this message ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_message: Option<String>,
    /// Page size; defaults to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl MessageListParams {
    /// Lists the messages of `room_id`.
    #[must_use]
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            ..Self::default()
        }
    }
}

/// Parameters for listing the direct messages exchanged with one person.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectMessageListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Additional query parameters.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for posting a message.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// The parent message to reply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// A public URL or a local path. Only one file is supported.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Content attachments, such as adaptive cards.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Value>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fields for editing a message.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdateParams {
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    /// Additional body fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl<M: ModelFactory> ResourceApi<Messages, M> {
    /// Binds a reusable query over the direct messages with one person.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the parameters do not
    /// serialize to a query string.
    pub fn list_direct(
        &self,
        params: &DirectMessageListParams,
    ) -> Result<ListQuery<Output<Messages, M>>, HttpError> {
        self.list_at("messages/direct", params, None)
    }
}

fn is_web_url(file: &str) -> bool {
    file.starts_with("http://") || file.starts_with("https://")
}

async fn read_local_file(path: &str) -> Result<FilePart, InvalidHttpRequestError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| InvalidHttpRequestError::InvalidArgument {
            name: "files",
            reason: format!("cannot read '{path}': {e}"),
        })?;

    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string();

    Ok(FilePart {
        field: "files".to_string(),
        content_type: guess_content_type(&file_name),
        file_name,
        bytes,
    })
}

/// Guesses a MIME type from a file extension.
///
/// Unknown extensions get [`DEFAULT_UPLOAD_CONTENT_TYPE`].
#[must_use]
pub fn guess_content_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first()
        .map_or_else(|| DEFAULT_UPLOAD_CONTENT_TYPE.to_string(), |mime| mime.to_string())
}
