//! Guest issuer: access tokens for guest users.
//!
//! A Guest Issuer app signs a short-lived JWT describing the guest with its
//! shared secret, then trades it at `jwt/login` for a Webex access token.
//! The login call authenticates with the signed JWT instead of the
//! session's own token.
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::{Duration, Utc};
//! use webex_api::rest::resources::GuestTokenRequest;
//!
//! let token = api
//!     .guest_issuer()
//!     .create(&GuestTokenRequest {
//!         subject: "guest-1234".to_string(),
//!         display_name: "Support Guest".to_string(),
//!         issuer: guest_issuer_id,
//!         expires_at: Utc::now() + Duration::hours(1),
//!         secret: guest_issuer_secret,
//!     })
//!     .await?;
//! println!("guest token: {}", token.token().unwrap_or_default());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use base64::prelude::*;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::clients::{HttpError, InvalidHttpRequestError, RestSession};
use crate::models::{GuestIssuerToken, ModelFactory, TypedModels};
use crate::rest::resource::build_record;

/// Path of the guest login endpoint.
pub const GUEST_LOGIN_PATH: &str = "jwt/login";

/// What to put in a guest token request.
#[derive(Clone)]
pub struct GuestTokenRequest {
    /// Unique, public identifier of the guest; letters, digits and hyphens.
    pub subject: String,
    /// Display name shown in Webex clients.
    pub display_name: String,
    /// The Guest Issuer ID.
    pub issuer: String,
    /// When the signed request expires. Keep it short.
    pub expires_at: DateTime<Utc>,
    /// The base64-encoded Guest Issuer secret.
    pub secret: String,
}

impl fmt::Debug for GuestTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestTokenRequest")
            .field("subject", &self.subject)
            .field("display_name", &self.display_name)
            .field("issuer", &self.issuer)
            .field("expires_at", &self.expires_at)
            .field("secret", &"*****")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct GuestClaims<'a> {
    sub: &'a str,
    name: &'a str,
    iss: &'a str,
    exp: i64,
}

impl GuestTokenRequest {
    /// Signs the request as an HS256 JWT.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the secret is not valid
    /// base64 and [`HttpError::Signing`] if signing fails.
    pub fn sign(&self) -> Result<String, HttpError> {
        let key = BASE64_STANDARD
            .decode(self.secret.trim().as_bytes())
            .map_err(|e| InvalidHttpRequestError::InvalidArgument {
                name: "secret",
                reason: format!("not valid base64: {e}"),
            })?;

        let claims = GuestClaims {
            sub: &self.subject,
            name: &self.display_name,
            iss: &self.issuer,
            exp: self.expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&key),
        )?;
        Ok(token)
    }
}

/// Mints guest access tokens.
pub struct GuestIssuerApi<M = TypedModels> {
    session: Arc<RestSession>,
    _marker: PhantomData<fn() -> M>,
}

impl<M: ModelFactory> GuestIssuerApi<M> {
    /// Creates a wrapper over a shared session.
    #[must_use]
    pub const fn new(session: Arc<RestSession>) -> Self {
        Self {
            session,
            _marker: PhantomData,
        }
    }

    /// Signs `request` and exchanges it for a guest access token.
    ///
    /// # Errors
    ///
    /// Returns the signing errors of [`GuestTokenRequest::sign`] and any
    /// [`HttpError`] raised by the login request.
    pub async fn create(
        &self,
        request: &GuestTokenRequest,
    ) -> Result<M::Output<GuestIssuerToken>, HttpError> {
        let jwt = request.sign()?;

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {jwt}"));

        let json = self
            .session
            .post(GUEST_LOGIN_PATH, None, None, Some(headers))
            .await?;
        build_record::<GuestIssuerToken, M>(json)
    }
}

impl<M> Clone for GuestIssuerApi<M> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            _marker: PhantomData,
        }
    }
}

impl<M> fmt::Debug for GuestIssuerApi<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestIssuerApi").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct DecodedClaims {
        sub: String,
        name: String,
        iss: String,
        exp: i64,
    }

    fn create_test_request() -> GuestTokenRequest {
        GuestTokenRequest {
            subject: "guest-1".to_string(),
            display_name: "Guest One".to_string(),
            issuer: "issuer-id".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
            secret: BASE64_STANDARD.encode(b"super-secret-key"),
        }
    }

    #[test]
    fn test_sign_produces_verifiable_hs256_token() {
        let request = create_test_request();
        let token = request.sign().unwrap();

        let decoded = decode::<DecodedClaims>(
            &token,
            &DecodingKey::from_secret(b"super-secret-key"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "guest-1");
        assert_eq!(decoded.claims.name, "Guest One");
        assert_eq!(decoded.claims.iss, "issuer-id");
        assert_eq!(decoded.claims.exp, request.expires_at.timestamp());
    }

    #[test]
    fn test_sign_rejects_invalid_secret() {
        let mut request = create_test_request();
        request.secret = "not base64!!".to_string();

        assert!(matches!(
            request.sign(),
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidArgument {
                name: "secret",
                ..
            }))
        ));
    }

    #[test]
    fn test_debug_masks_secret() {
        let debug = format!("{:?}", create_test_request());
        assert!(debug.contains("*****"));
        assert!(!debug.contains(&BASE64_STANDARD.encode(b"super-secret-key")));
    }
}
