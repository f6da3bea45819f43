// src/application/commands/oauth2.rs
use crate::application::{
    ApplicationResult,
    broker::{CredentialBroker, IssuedToken},
    error::ApplicationError,
    ports::security::SecretVerifier,
};
use std::sync::Arc;
use url::Url;

pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

/// The single client registered with the broker.
#[derive(Clone)]
pub struct OAuthClient {
    pub client_id: String,
    pub redirect_uri: String,
    pub secret: Arc<dyn SecretVerifier>,
}

pub struct AuthorizeCommand {
    pub client_id: String,
    pub redirect_uri: String,
    /// Opaque client value echoed back next to the code.
    pub state: Option<String>,
}

pub struct TokenGrantCommand {
    pub grant_type: String,
    pub code: String,
    pub client_id: String,
    pub client_secret: String,
}

pub struct OAuthClientService {
    broker: Arc<CredentialBroker>,
    client: OAuthClient,
}

impl OAuthClientService {
    pub fn new(broker: Arc<CredentialBroker>, client: OAuthClient) -> Self {
        Self { broker, client }
    }

    /// Issue a code for the registered client and return the URL to send the user agent to.
    pub fn authorize(&self, command: AuthorizeCommand) -> ApplicationResult<Url> {
        if command.client_id != self.client.client_id
            || command.redirect_uri != self.client.redirect_uri
        {
            tracing::warn!(client_id = %command.client_id, "authorize rejected unknown client");
            return Err(ApplicationError::InvalidClient);
        }

        let mut target = Url::parse(&self.client.redirect_uri)
            .map_err(|err| ApplicationError::validation(format!("redirect_uri: {err}")))?;
        let code = self.broker.issue_code()?;
        {
            let mut query = target.query_pairs_mut();
            query.append_pair("code", code.code());
            if let Some(state) = command.state.as_deref().filter(|s| !s.is_empty()) {
                query.append_pair("state", state);
            }
        }
        Ok(target)
    }

    pub fn grant_token(&self, command: TokenGrantCommand) -> ApplicationResult<IssuedToken> {
        // Evaluate both checks so a bad client id does not short-circuit the secret comparison.
        let client_ok = command.client_id == self.client.client_id;
        let secret_ok = self.client.secret.verify(&command.client_secret);
        if command.grant_type != AUTHORIZATION_CODE_GRANT || !(client_ok & secret_ok) {
            tracing::warn!(client_id = %command.client_id, "token request rejected");
            return Err(ApplicationError::InvalidClient);
        }

        self.broker.exchange(&command.code).inspect_err(|err| {
            tracing::warn!(error = %err, "token exchange failed");
        })
    }

    /// Exchange a code delivered to the callback endpoint by the user agent.
    pub fn complete_callback(&self, code: &str) -> ApplicationResult<IssuedToken> {
        if code.is_empty() {
            return Err(ApplicationError::validation("missing authorization code"));
        }
        self.broker.exchange(code)
    }

    pub fn access_token_ttl_secs(&self) -> i64 {
        self.broker.access_token_ttl().num_seconds()
    }
}
