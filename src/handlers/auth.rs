use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::{auth::OptionalAuthUser, AuthUser};
use crate::session::{self, SessionKey};

#[derive(Clone)]
pub struct AuthState {
    /// Where the sign-in button points: the identity provider's
    /// authorize endpoint, which redirects back to /auth/callback.
    pub auth_url: String,
}

// Templates
#[derive(Template)]
#[template(path = "auth/signin.html")]
struct SigninTemplate {
    auth_url: String,
}

#[derive(Template)]
#[template(path = "auth/error.html")]
struct AuthErrorTemplate {}

// Handlers

pub async fn signin_page(
    State(state): State<AuthState>,
    OptionalAuthUser(auth_user): OptionalAuthUser,
) -> Result<Response> {
    // Already signed in: nothing to do here
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let template = SigninTemplate {
        auth_url: state.auth_url.clone(),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

#[derive(Deserialize)]
pub struct CallbackParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

/// Terminus of the provider redirect flow. The provider has already
/// verified the user; all that is left is to record the display fields
/// in a signed cookie.
pub async fn callback(
    Extension(key): Extension<SessionKey>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Result<Response> {
    let jar = SignedCookieJar::from_headers(&headers, key.0.clone());

    let Some(email) = params.email.filter(|email| !email.is_empty()) else {
        tracing::warn!("sign-in callback without an email");
        return Ok(Redirect::to("/auth/error").into_response());
    };

    let user = AuthUser {
        session_id: Uuid::new_v4().to_string(),
        name: params.name.unwrap_or_else(|| email.clone()),
        email,
        avatar: params.avatar,
    };

    let cookie = session::create_session_cookie(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let jar = jar.add(cookie);

    tracing::info!(email = %user.email, "user signed in");
    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn signout(
    Extension(key): Extension<SessionKey>,
    headers: HeaderMap,
) -> Result<Response> {
    let jar = SignedCookieJar::from_headers(&headers, key.0.clone());
    let jar = jar.remove(session::remove_session_cookie());

    Ok((jar, Redirect::to("/auth/signin")).into_response())
}

pub async fn error_page() -> Result<Response> {
    let template = AuthErrorTemplate {};

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
