// src/infrastructure/security/mod.rs
pub mod credential_store;
pub mod secret;
pub mod token_generator;
