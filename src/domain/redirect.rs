// src/domain/redirect.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use url::Url;

/// Internal base used only to resolve candidate targets; never shown to clients.
const RESOLVE_BASE: &str = "http://dashgate.invalid/";

/// A post-login destination that is guaranteed to stay on this origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    pub const DEFAULT_PATH: &'static str = "/settings/main";

    pub fn parse(candidate: impl AsRef<str>) -> DomainResult<Self> {
        let candidate = candidate.as_ref().trim();

        if candidate.is_empty() {
            return Err(DomainError::Validation("redirect target is empty".into()));
        }
        if !candidate.starts_with('/') || candidate.starts_with("//") {
            return Err(DomainError::Validation(
                "redirect target must be a relative path".into(),
            ));
        }
        if candidate.contains('\\') || candidate.chars().any(char::is_control) {
            return Err(DomainError::Validation(
                "redirect target contains forbidden characters".into(),
            ));
        }

        let base = Url::parse(RESOLVE_BASE)
            .map_err(|err| DomainError::Validation(err.to_string()))?;
        let resolved = base
            .join(candidate)
            .map_err(|err| DomainError::Validation(err.to_string()))?;
        if resolved.origin() != base.origin() {
            return Err(DomainError::Validation(
                "redirect target leaves this origin".into(),
            ));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Falls back to [`Self::DEFAULT_PATH`] for absent, empty or unsafe input.
    pub fn or_default(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|value| Self::parse(value).ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RedirectTarget {
    fn default() -> Self {
        Self(Self::DEFAULT_PATH.to_string())
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
