// src/application/ports/security.rs
use crate::application::ApplicationResult;

/// Produces opaque credential strings from a cryptographically secure source.
pub trait TokenGenerator: Send + Sync {
    /// Fails with `ApplicationError::RandomSource` when no entropy is available.
    fn generate(&self) -> ApplicationResult<String>;
}

/// Checks a supplied shared secret against the configured one.
///
/// Implementations must not leak timing information about where the inputs differ.
pub trait SecretVerifier: Send + Sync {
    fn verify(&self, supplied: &str) -> bool;
}
