// src/presentation/http/controllers/mod.rs
pub mod dashboard;
pub mod login;
pub mod oauth2;
