// src/presentation/http/responses.rs
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::error::HttpError;

pub const LOGIN_PATH: &str = "/login";

/// `302 Found` to `location`, optionally carrying a `Set-Cookie` header.
pub fn found(location: &str, set_cookie: Option<HeaderValue>) -> Result<Response, HttpError> {
    let location = HeaderValue::from_str(location).map_err(|err| {
        tracing::error!(error = %err, "unrepresentable redirect location");
        HttpError::internal()
    })?;

    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();
    headers.insert(header::LOCATION, location);
    if let Some(cookie) = set_cookie {
        headers.insert(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

/// Escape the characters that would split or truncate a single query value.
/// `/` stays literal so the login URL reads `/login?redirect=/settings/main`.
pub fn escape_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            '#' => out.push_str("%23"),
            ' ' => out.push_str("%20"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Where the gate sends a request that lacks a valid session.
pub fn login_location(requested_path: &str) -> String {
    format!("{LOGIN_PATH}?redirect={}", escape_query_value(requested_path))
}

/// Where a failed login sends the user agent back to.
pub fn login_failed_location(redirect: Option<&str>) -> String {
    match redirect {
        Some(target) => format!(
            "{LOGIN_PATH}?error=invalid_password&redirect={}",
            escape_query_value(target)
        ),
        None => format!("{LOGIN_PATH}?error=invalid_password"),
    }
}
