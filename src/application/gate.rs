// src/application/gate.rs
use crate::application::broker::CredentialBroker;
use std::sync::Arc;

/// The set of path prefixes that require a valid session.
#[derive(Debug, Clone)]
pub struct ProtectedPaths {
    prefixes: Vec<String>,
}

impl ProtectedPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        Self { prefixes }
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// Outcome of running a single request through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Path is not protected; the gate does not apply.
    Bypass,
    NoCookie,
    InvalidToken,
    Authorized,
}

impl GateDecision {
    pub fn allows(&self) -> bool {
        matches!(self, GateDecision::Bypass | GateDecision::Authorized)
    }
}

pub struct RequestGate {
    broker: Arc<CredentialBroker>,
    protected: ProtectedPaths,
}

impl RequestGate {
    pub fn new(broker: Arc<CredentialBroker>, protected: ProtectedPaths) -> Self {
        Self { broker, protected }
    }

    pub fn evaluate(&self, path: &str, session_token: Option<&str>) -> GateDecision {
        if !self.protected.is_protected(path) {
            return GateDecision::Bypass;
        }
        self.check_session(session_token)
    }

    /// Validate a session regardless of path; never returns `Bypass`.
    pub fn check_session(&self, session_token: Option<&str>) -> GateDecision {
        match session_token {
            None | Some("") => GateDecision::NoCookie,
            Some(token) if self.broker.validate(token) => GateDecision::Authorized,
            Some(_) => GateDecision::InvalidToken,
        }
    }
}
