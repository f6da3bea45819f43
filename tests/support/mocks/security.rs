// tests/support/mocks/security.rs
use dashgate::application::{
    ApplicationResult, error::ApplicationError, ports::security::TokenGenerator,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const CLIENT_ID: &str = "dashgate-client";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Entropy source that is always unavailable.
pub struct FailingTokenGenerator;

impl TokenGenerator for FailingTokenGenerator {
    fn generate(&self) -> ApplicationResult<String> {
        Err(ApplicationError::random_source("entropy source unavailable"))
    }
}

/// Deterministic `value-0`, `value-1`, ... generator.
#[derive(Default)]
pub struct SequenceTokenGenerator {
    next: AtomicUsize,
}

impl TokenGenerator for SequenceTokenGenerator {
    fn generate(&self) -> ApplicationResult<String> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(format!("value-{n}"))
    }
}
