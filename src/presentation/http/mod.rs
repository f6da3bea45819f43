// src/presentation/http/mod.rs
pub mod controllers;
pub mod cookies;
pub mod error;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;
