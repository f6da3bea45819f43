// src/lib.rs
//! Authorization-code credential broker guarding the protected pages of a dashboard.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
