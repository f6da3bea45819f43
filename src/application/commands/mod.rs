// src/application/commands/mod.rs
pub mod login;
pub mod oauth2;

pub use login::{LoginCommand, LoginOutcome, LoginService, SessionCookie};
pub use oauth2::{AuthorizeCommand, OAuthClient, OAuthClientService, TokenGrantCommand};
