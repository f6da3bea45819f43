// src/infrastructure/mod.rs
pub mod security;
pub mod sweeper;
pub mod time;
