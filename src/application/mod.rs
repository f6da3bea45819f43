// src/application/mod.rs
pub mod broker;
pub mod commands;
pub mod error;
pub mod gate;
pub mod ports;
pub mod services;

pub use error::ApplicationResult;
