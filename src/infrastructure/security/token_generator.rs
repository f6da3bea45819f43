// src/infrastructure/security/token_generator.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenGenerator,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};

/// 256 bits per credential.
pub const TOKEN_BYTES: usize = 32;

/// Draws credentials straight from the operating system CSPRNG.
#[derive(Default, Clone, Copy)]
pub struct OsRngTokenGenerator;

impl TokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> ApplicationResult<String> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| ApplicationError::random_source(err.to_string()))?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}
