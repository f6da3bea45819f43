// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidOrExpiredCode => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_grant",
                err.to_string(),
            ),
            ApplicationError::InvalidClient => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                "invalid client_id, client_secret or redirect_uri".into(),
            ),
            ApplicationError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid_request", msg)
            }
            ApplicationError::Domain(domain_err) => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                domain_err.to_string(),
            ),
            ApplicationError::RandomSource(msg) => {
                tracing::error!(error = %msg, "credential generation failed");
                Self::internal()
            }
        }
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "server_error",
            "internal server error".into(),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, error: &'static str, message: String) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
