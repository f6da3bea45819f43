// src/presentation/http/controllers/oauth2.rs
use crate::application::commands::{AuthorizeCommand, SessionCookie, TokenGrantCommand};
use crate::application::error::ApplicationError;
use crate::presentation::http::{
    cookies::{self, session_token},
    error::{HttpError, HttpResult, IntoHttpResult},
    responses,
    state::HttpState,
};
use axum::{
    Extension, Form, Json,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Where a successful callback lands.
const CALLBACK_LANDING: &str = "/settings/main";
const AUTHORIZE_PATH: &str = "/oauth2/authorize";

#[derive(Debug, Deserialize)]
pub struct AuthorizeParams {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct TokenForm {
    #[serde(default)]
    pub grant_type: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
}

/// Requires a live session whatever the configured protected prefixes are.
pub async fn authorize(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    Query(params): Query<AuthorizeParams>,
) -> HttpResult<Response> {
    let token = session_token(&headers);
    let decision = state.services.gate().check_session(token.as_deref());
    if !decision.allows() {
        tracing::debug!(?decision, "authorize without a session");
        return responses::found(&responses::login_location(AUTHORIZE_PATH), None);
    }

    let command = AuthorizeCommand {
        client_id: params.client_id,
        redirect_uri: params.redirect_uri,
        state: params.state,
    };

    match state.services.oauth.authorize(command) {
        Ok(target) => responses::found(target.as_str(), None),
        Err(ApplicationError::InvalidClient) => Ok((
            StatusCode::BAD_REQUEST,
            "Invalid client_id or redirect_uri",
        )
            .into_response()),
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn token(
    Extension(state): Extension<HttpState>,
    Form(form): Form<TokenForm>,
) -> HttpResult<Json<TokenResponse>> {
    let command = TokenGrantCommand {
        grant_type: form.grant_type,
        code: form.code,
        client_id: form.client_id,
        client_secret: form.client_secret,
    };

    let oauth = &state.services.oauth;
    let issued = oauth.grant_token(command).into_http()?;

    Ok(Json(TokenResponse {
        access_token: issued.token,
        token_type: "Bearer",
        expires_in: oauth.access_token_ttl_secs(),
    }))
}

pub async fn callback(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CallbackParams>,
) -> HttpResult<Response> {
    let code = params.code.unwrap_or_default();
    let issued = state.services.oauth.complete_callback(&code).into_http()?;

    let set_cookie = cookies::set_cookie(&SessionCookie::from(issued))?;
    responses::found(CALLBACK_LANDING, Some(set_cookie))
}
