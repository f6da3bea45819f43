// src/presentation/http/controllers/dashboard.rs
//! Stand-ins for the dashboard pages. Page rendering lives outside this crate;
//! these handlers only give the gate something to guard.
use axum::{extract::Path, response::Html};

pub async fn index() -> Html<&'static str> {
    Html("<!doctype html><title>Dashboard</title><h1>Dashboard</h1>")
}

pub async fn settings(Path(section): Path<String>) -> Html<String> {
    let section: String = section
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_'))
        .collect();
    Html(format!(
        "<!doctype html><title>Settings</title><h1>Settings: {section}</h1>"
    ))
}
