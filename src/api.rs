//! The top-level API object.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::clients::RestSession;
use crate::config::WebexConfig;
use crate::error::ConfigError;
use crate::models::{ModelFactory, TypedModels};
use crate::rest::resources::{
    AttachmentActions, Events, GuestIssuerApi, MeetingInvitees, Meetings, Memberships, Messages,
    People, Recordings, Rooms, TeamMemberships, Teams, Webhooks,
};
use crate::rest::ResourceApi;

/// Entry point to the Webex REST API.
///
/// Owns one [`RestSession`] and hands out resource wrappers that share it.
/// The model strategy `M` decides what every call returns: typed records
/// (the default), raw JSON objects, or [`SimpleRecord`]s.
///
/// # Thread Safety
///
/// `WebexApi` is `Clone`, `Send` and `Sync`; clones share the session.
///
/// # Example
///
/// ```rust,no_run
/// use webex_api::{AccessToken, WebexApi, WebexConfig};
///
/// let config = WebexConfig::builder()
///     .access_token(AccessToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let api = WebexApi::new(&config).unwrap();
/// let rooms = api.rooms();
/// ```
///
/// [`SimpleRecord`]: crate::models::SimpleRecord
pub struct WebexApi<M = TypedModels> {
    session: Arc<RestSession>,
    _models: PhantomData<fn() -> M>,
}

// Verify WebexApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebexApi>();
};

impl WebexApi<TypedModels> {
    /// Creates an API object returning typed records.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP session cannot be created.
    pub fn new(config: &WebexConfig) -> Result<Self, ConfigError> {
        Self::with_models(config)
    }

    /// Creates an API object configured entirely from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if `WEBEX_ACCESS_TOKEN` is
    /// not set, or any error of [`WebexApi::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&WebexConfig::from_env()?)
    }
}

impl<M: ModelFactory> WebexApi<M> {
    /// Creates an API object using the model strategy `M`.
    ///
    /// ```rust,no_run
    /// use webex_api::models::RawModels;
    /// use webex_api::{AccessToken, WebexApi, WebexConfig};
    ///
    /// let config = WebexConfig::builder()
    ///     .access_token(AccessToken::new("my-token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let api = WebexApi::<RawModels>::with_models(&config).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP session cannot be created.
    pub fn with_models(config: &WebexConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_session(Arc::new(RestSession::new(config)?)))
    }

    /// Wraps an existing session.
    #[must_use]
    pub const fn from_session(session: Arc<RestSession>) -> Self {
        Self {
            session,
            _models: PhantomData,
        }
    }

    /// Returns the shared session.
    #[must_use]
    pub const fn session(&self) -> &Arc<RestSession> {
        &self.session
    }

    /// The `rooms` resource.
    #[must_use]
    pub fn rooms(&self) -> ResourceApi<Rooms, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `messages` resource.
    #[must_use]
    pub fn messages(&self) -> ResourceApi<Messages, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `memberships` resource.
    #[must_use]
    pub fn memberships(&self) -> ResourceApi<Memberships, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `teams` resource.
    #[must_use]
    pub fn teams(&self) -> ResourceApi<Teams, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `team/memberships` resource.
    #[must_use]
    pub fn team_memberships(&self) -> ResourceApi<TeamMemberships, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `people` resource.
    #[must_use]
    pub fn people(&self) -> ResourceApi<People, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `webhooks` resource.
    #[must_use]
    pub fn webhooks(&self) -> ResourceApi<Webhooks, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `meetingInvitees` resource.
    #[must_use]
    pub fn meeting_invitees(&self) -> ResourceApi<MeetingInvitees, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `meetings` resource.
    #[must_use]
    pub fn meetings(&self) -> ResourceApi<Meetings, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `recordings` resource.
    #[must_use]
    pub fn recordings(&self) -> ResourceApi<Recordings, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `events` resource.
    #[must_use]
    pub fn events(&self) -> ResourceApi<Events, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// The `attachment/actions` resource.
    #[must_use]
    pub fn attachment_actions(&self) -> ResourceApi<AttachmentActions, M> {
        ResourceApi::new(Arc::clone(&self.session))
    }

    /// Guest token issuing.
    #[must_use]
    pub fn guest_issuer(&self) -> GuestIssuerApi<M> {
        GuestIssuerApi::new(Arc::clone(&self.session))
    }
}

impl<M> Clone for WebexApi<M> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            _models: PhantomData,
        }
    }
}

impl<M> fmt::Debug for WebexApi<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebexApi")
            .field("base_url", &self.session.base_url().to_string())
            .finish_non_exhaustive()
    }
}
