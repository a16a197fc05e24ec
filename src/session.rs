use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use serde::Serialize;

pub const SESSION_COOKIE_NAME: &str = "session";

/// Key for signing session cookies, generated at boot. Sessions do not
/// survive a restart; signing in again is a cheap redirect through the
/// identity provider.
#[derive(Clone)]
pub struct SessionKey(pub Key);

impl SessionKey {
    pub fn generate() -> Self {
        Self(Key::generate())
    }
}

pub fn create_session_cookie(
    value: &impl Serialize,
) -> Result<Cookie<'static>, serde_json::Error> {
    let payload = serde_json::to_string(value)?;
    Ok(Cookie::build((SESSION_COOKIE_NAME, payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(7))
        .build())
}

pub fn remove_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}
