// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    broker::{BrokerSettings, CredentialBroker},
    commands::{LoginService, OAuthClient, OAuthClientService},
    gate::{ProtectedPaths, RequestGate},
    ports::{ClockPort, CredentialStorePort, SecretVerifierPort, TokenGeneratorPort},
};

/// Composition root: one broker, shared by the gate, the login flow and the
/// OAuth2 client endpoints.
pub struct ApplicationServices {
    pub login: Arc<LoginService>,
    pub oauth: Arc<OAuthClientService>,
    gate: Arc<RequestGate>,
    broker: Arc<CredentialBroker>,
}

pub struct ServiceDependencies {
    pub store: Arc<CredentialStorePort>,
    pub clock: Arc<ClockPort>,
    pub generator: Arc<TokenGeneratorPort>,
    pub admin_secret: Arc<SecretVerifierPort>,
    pub client: OAuthClient,
}

impl ApplicationServices {
    pub fn new(
        deps: ServiceDependencies,
        settings: BrokerSettings,
        protected: ProtectedPaths,
    ) -> ApplicationResult<Self> {
        let broker = Arc::new(CredentialBroker::new(
            deps.store,
            deps.clock,
            deps.generator,
            settings,
        )?);

        let gate = Arc::new(RequestGate::new(Arc::clone(&broker), protected));
        let login = Arc::new(LoginService::new(Arc::clone(&broker), deps.admin_secret));
        let oauth = Arc::new(OAuthClientService::new(Arc::clone(&broker), deps.client));

        Ok(Self {
            login,
            oauth,
            gate,
            broker,
        })
    }

    pub fn gate(&self) -> Arc<RequestGate> {
        Arc::clone(&self.gate)
    }

    pub fn broker(&self) -> Arc<CredentialBroker> {
        Arc::clone(&self.broker)
    }
}
