// src/domain/credential.rs
use chrono::{DateTime, Utc};
use std::fmt;

/// Which of the two credential maps an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    AuthorizationCode,
    AccessToken,
}

/// A stored credential. The opaque value doubles as the map key.
///
/// The `Debug` impl redacts the value so entries can be traced safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(value: String, issued_at: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            value,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// A credential is dead once `now` is strictly past its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Short-lived, single-use credential exchanged for an [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationCode(pub Credential);

/// Bearer credential proving a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub Credential);

impl AuthorizationCode {
    pub fn code(&self) -> &str {
        &self.0.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.0.expires_at
    }
}

impl AccessToken {
    pub fn token(&self) -> &str {
        &self.0.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.0.expires_at
    }
}

impl From<AuthorizationCode> for Credential {
    fn from(value: AuthorizationCode) -> Self {
        value.0
    }
}

impl From<AccessToken> for Credential {
    fn from(value: AccessToken) -> Self {
        value.0
    }
}
