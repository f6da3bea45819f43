// src/application/commands/login.rs
use crate::application::{
    ApplicationResult,
    broker::{CredentialBroker, IssuedToken},
    ports::security::SecretVerifier,
};
use crate::domain::redirect::RedirectTarget;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct LoginCommand {
    pub secret: String,
    pub redirect: Option<String>,
}

/// What the caller should do with the `access_token` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCookie {
    Set {
        token: String,
        expires_at: DateTime<Utc>,
    },
    /// Overwrite with an empty, already-expired value.
    Clear,
}

impl From<IssuedToken> for SessionCookie {
    fn from(issued: IssuedToken) -> Self {
        SessionCookie::Set {
            token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}

#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated {
        cookie: SessionCookie,
        redirect: RedirectTarget,
    },
    /// Wrong secret. Carries the caller's raw redirect value so the form can be re-rendered.
    Rejected { redirect: Option<String> },
}

pub struct LoginService {
    broker: Arc<CredentialBroker>,
    verifier: Arc<dyn SecretVerifier>,
}

impl LoginService {
    pub fn new(broker: Arc<CredentialBroker>, verifier: Arc<dyn SecretVerifier>) -> Self {
        Self { broker, verifier }
    }

    pub fn attempt_login(&self, command: LoginCommand) -> ApplicationResult<LoginOutcome> {
        if !self.verifier.verify(&command.secret) {
            tracing::warn!("login rejected");
            return Ok(LoginOutcome::Rejected {
                redirect: command.redirect.filter(|r| !r.is_empty()),
            });
        }

        let code = self.broker.issue_code()?;
        let issued = self.broker.exchange(code.code())?;
        let redirect = RedirectTarget::or_default(command.redirect.as_deref());

        tracing::info!(redirect = %redirect, "administrator logged in");
        Ok(LoginOutcome::Authenticated {
            cookie: issued.into(),
            redirect,
        })
    }

    /// The broker keeps the token; only the client copy is discarded.
    pub fn logout(&self) -> SessionCookie {
        SessionCookie::Clear
    }
}
