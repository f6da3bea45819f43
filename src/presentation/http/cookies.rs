// src/presentation/http/cookies.rs
use crate::application::commands::SessionCookie;
use axum::http::{HeaderMap, HeaderValue};
use headers::{Cookie, HeaderMapExt};
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::HttpError;

pub const SESSION_COOKIE: &str = "access_token";

const ATTRIBUTES: &str = "Path=/; HttpOnly; Secure; SameSite=Lax";

/// Value of the `access_token` cookie, if the request carries one.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(str::to_owned))
}

/// Render a `Set-Cookie` value for the given instruction.
pub fn set_cookie(cookie: &SessionCookie) -> Result<HeaderValue, HttpError> {
    let rendered = match cookie {
        SessionCookie::Set { token, expires_at } => format!(
            "{SESSION_COOKIE}={token}; Expires={}; {ATTRIBUTES}",
            httpdate::fmt_http_date(SystemTime::from(*expires_at))
        ),
        SessionCookie::Clear => format!(
            "{SESSION_COOKIE}=; Expires={}; Max-Age=0; {ATTRIBUTES}",
            httpdate::fmt_http_date(UNIX_EPOCH)
        ),
    };

    HeaderValue::from_str(&rendered).map_err(|err| {
        tracing::error!(error = %err, "session cookie is not a valid header value");
        HttpError::internal()
    })
}
