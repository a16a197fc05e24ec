use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::{Deserialize, Serialize};

use crate::session::{SessionKey, SESSION_COOKIE_NAME};

/// The signed-in user as read from the session cookie: the display
/// fields the identity provider vouched for, plus the id keying this
/// sign-in's transient server-side state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl AuthUser {
    fn from_parts(parts: &Parts) -> Option<Self> {
        let key = parts.extensions.get::<SessionKey>()?;
        let jar = SignedCookieJar::from_headers(&parts.headers, key.0.clone());
        let cookie = jar.get(SESSION_COOKIE_NAME)?;
        serde_json::from_str(cookie.value()).ok()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        AuthUser::from_parts(parts).ok_or(AuthRedirect)
    }
}

pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/auth/signin").into_response()
    }
}

// Optional auth - doesn't redirect, just returns None if not signed in
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(AuthUser::from_parts(parts)))
    }
}
