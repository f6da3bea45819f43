// src/application/ports/mod.rs
pub mod credential_store;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type CredentialStorePort = dyn credential_store::CredentialStore;
pub type TokenGeneratorPort = dyn security::TokenGenerator;
pub type SecretVerifierPort = dyn security::SecretVerifier;
pub type ClockPort = dyn time::Clock;
