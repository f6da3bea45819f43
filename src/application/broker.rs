// src/application/broker.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{credential_store::CredentialStore, security::TokenGenerator, time::Clock},
};
use crate::domain::credential::{AccessToken, AuthorizationCode, Credential, CredentialKind};
use chrono::{DateTime, Utc};
use std::{sync::Arc, time::Duration};

#[derive(Debug, Clone, Copy)]
pub struct BrokerSettings {
    pub auth_code_ttl: Duration,
    pub access_token_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues authorization codes, trades them for access tokens exactly once and
/// validates those tokens. Sole owner of the credential store.
pub struct CredentialBroker {
    store: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn TokenGenerator>,
    auth_code_ttl: chrono::Duration,
    access_token_ttl: chrono::Duration,
}

impl CredentialBroker {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        clock: Arc<dyn Clock>,
        generator: Arc<dyn TokenGenerator>,
        settings: BrokerSettings,
    ) -> ApplicationResult<Self> {
        Ok(Self {
            store,
            clock,
            generator,
            auth_code_ttl: to_chrono(settings.auth_code_ttl, "auth code ttl")?,
            access_token_ttl: to_chrono(settings.access_token_ttl, "access token ttl")?,
        })
    }

    pub fn access_token_ttl(&self) -> chrono::Duration {
        self.access_token_ttl
    }

    pub fn issue_code(&self) -> ApplicationResult<AuthorizationCode> {
        let value = self.generator.generate()?;
        let code = AuthorizationCode(Credential::new(value, self.clock.now(), self.auth_code_ttl));
        self.store
            .put(CredentialKind::AuthorizationCode, code.0.clone());
        tracing::debug!(expires_at = %code.expires_at(), "authorization code issued");
        Ok(code)
    }

    pub fn exchange(&self, code: &str) -> ApplicationResult<IssuedToken> {
        // Draw the token first so an entropy failure leaves the code usable.
        let value = self.generator.generate()?;

        let consumed = self
            .store
            .take(CredentialKind::AuthorizationCode, code)
            .ok_or(ApplicationError::InvalidOrExpiredCode)?;

        let now = self.clock.now();
        if consumed.is_expired(now) {
            return Err(ApplicationError::InvalidOrExpiredCode);
        }

        let token = AccessToken(Credential::new(value, now, self.access_token_ttl));
        let issued = IssuedToken {
            token: token.token().to_string(),
            expires_at: token.expires_at(),
        };
        self.store.put(CredentialKind::AccessToken, token.into());
        tracing::debug!(expires_at = %issued.expires_at, "authorization code exchanged");
        Ok(issued)
    }

    pub fn validate(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        match self.store.get(CredentialKind::AccessToken, token) {
            Some(entry) => !entry.is_expired(self.clock.now()),
            None => false,
        }
    }

    /// Evict expired codes and tokens. Purely a memory bound; `exchange` and
    /// `validate` already reject expired entries on read.
    pub fn sweep(&self) -> usize {
        self.store.purge_expired(self.clock.now())
    }
}

fn to_chrono(ttl: Duration, name: &str) -> ApplicationResult<chrono::Duration> {
    if ttl.is_zero() {
        return Err(ApplicationError::validation(format!("{name} must be positive")));
    }
    chrono::Duration::from_std(ttl)
        .map_err(|err| ApplicationError::validation(format!("{name}: {err}")))
}
