// src/presentation/http/middleware/session_gate.rs
use crate::presentation::http::{
    cookies::session_token, error::HttpError, responses, state::HttpState,
};
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Middleware that keeps anonymous traffic out of protected paths.
///
/// Usage: `axum::middleware::from_fn(require_session)`, layered inside the
/// `Extension(HttpState)` layer. Unprotected paths pass straight through; a
/// missing cookie and an invalid token both redirect to the login page with
/// the requested path preserved. The request body is never touched.
pub async fn require_session(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        tracing::error!("application state missing");
        return HttpError::internal().into_response();
    };

    let path = req.uri().path().to_owned();
    let token = session_token(req.headers());
    let decision = state.services.gate().evaluate(&path, token.as_deref());

    if decision.allows() {
        return next.run(req).await;
    }

    tracing::debug!(?decision, %path, "redirecting to login");
    responses::found(&responses::login_location(&path), None)
        .unwrap_or_else(IntoResponse::into_response)
}
