// src/domain/mod.rs
pub mod credential;
pub mod errors;
pub mod redirect;

pub use credential::{AccessToken, AuthorizationCode, Credential, CredentialKind};
pub use redirect::RedirectTarget;
