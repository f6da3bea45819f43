// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{dashboard, login, oauth2},
    middleware::{rate_limit::login_rate_limit_layer, session_gate::require_session},
    state::HttpState,
};
use axum::{
    Extension, Json, Router, middleware,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// The login limiter keys on the client IP, so requests need `ConnectInfo` or a
/// forwarding header such as `X-Forwarded-For`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit_login: bool) -> Router {
    let submit_login = if rate_limit_login {
        post(login::login).layer(login_rate_limit_layer())
    } else {
        post(login::login)
    };

    Router::new()
        .route("/health", get(health))
        .route("/", get(dashboard::index))
        .route("/dashboard", get(dashboard::index))
        .route("/settings/{*section}", get(dashboard::settings))
        .route("/login", get(login::login_page).merge(submit_login))
        .route("/logout", get(login::logout))
        .route("/oauth2/authorize", get(oauth2::authorize))
        .route("/oauth2/token", post(oauth2::token))
        .route("/callback", get(oauth2::callback))
        .layer(middleware::from_fn(require_session))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
