// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The entropy source could not produce a credential.
    #[error("random source unavailable: {0}")]
    RandomSource(String),

    /// Unknown and expired codes are deliberately indistinguishable.
    #[error("invalid or expired authorization code")]
    InvalidOrExpiredCode,

    #[error("invalid client credentials")]
    InvalidClient,

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    pub fn random_source(msg: impl Into<String>) -> Self {
        Self::RandomSource(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
