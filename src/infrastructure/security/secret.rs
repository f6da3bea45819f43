// src/infrastructure/security/secret.rs
use crate::application::ports::security::SecretVerifier;
use subtle::ConstantTimeEq;

/// Compares against a configured shared secret in constant time.
///
/// An empty configured secret never matches, which keeps an unconfigured
/// credential from accepting an empty submission.
#[derive(Clone)]
pub struct SharedSecretVerifier {
    expected: Vec<u8>,
}

impl SharedSecretVerifier {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into().into_bytes(),
        }
    }
}

impl SecretVerifier for SharedSecretVerifier {
    fn verify(&self, supplied: &str) -> bool {
        if self.expected.is_empty() {
            return false;
        }
        // `ct_eq` on slices of different length returns false without
        // inspecting content; only the length is observable.
        bool::from(self.expected.as_slice().ct_eq(supplied.as_bytes()))
    }
}

impl std::fmt::Debug for SharedSecretVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretVerifier").finish_non_exhaustive()
    }
}
