// tests/support/helpers.rs
use super::mocks::{self, ManualClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, header};
use axum::response::Response;
use dashgate::application::{
    broker::{BrokerSettings, CredentialBroker},
    commands::OAuthClient,
    gate::ProtectedPaths,
    ports::security::TokenGenerator,
    services::{ApplicationServices, ServiceDependencies},
};
use dashgate::infrastructure::security::{
    credential_store::InMemoryCredentialStore, secret::SharedSecretVerifier,
    token_generator::OsRngTokenGenerator,
};
use dashgate::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const AUTH_CODE_TTL_SECS: u64 = 60;
pub const ACCESS_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_PREFIXES: &[&str] = &["/settings/", "/oauth2/authorize"];

pub struct TestApp {
    pub router: axum::Router,
    pub clock: Arc<ManualClock>,
    pub store: Arc<InMemoryCredentialStore>,
    pub services: Arc<ApplicationServices>,
}

pub fn settings() -> BrokerSettings {
    BrokerSettings {
        auth_code_ttl: Duration::from_secs(AUTH_CODE_TTL_SECS),
        access_token_ttl: Duration::from_secs(ACCESS_TOKEN_TTL_SECS),
    }
}

/// Broker over an in-memory store and a manual clock.
pub fn build_broker(
    generator: Arc<dyn TokenGenerator>,
) -> (Arc<CredentialBroker>, Arc<ManualClock>, Arc<InMemoryCredentialStore>) {
    let clock = Arc::new(ManualClock::new());
    let store = Arc::new(InMemoryCredentialStore::new());
    let broker = CredentialBroker::new(store.clone(), clock.clone(), generator, settings())
        .expect("valid broker settings");
    (Arc::new(broker), clock, store)
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_generator(Arc::new(OsRngTokenGenerator))
}

pub fn build_test_app_with_generator(generator: Arc<dyn TokenGenerator>) -> TestApp {
    assemble(generator, DEFAULT_PREFIXES, false)
}

/// App whose gate only covers `prefixes`.
pub fn build_test_app_with_prefixes(prefixes: &[&str]) -> TestApp {
    assemble(Arc::new(OsRngTokenGenerator), prefixes, false)
}

/// App with the per-IP login limiter installed.
pub fn build_rate_limited_app() -> TestApp {
    assemble(Arc::new(OsRngTokenGenerator), DEFAULT_PREFIXES, true)
}

fn assemble(generator: Arc<dyn TokenGenerator>, prefixes: &[&str], rate_limit: bool) -> TestApp {
    let clock = Arc::new(ManualClock::new());
    let store = Arc::new(InMemoryCredentialStore::new());

    let services = Arc::new(
        ApplicationServices::new(
            ServiceDependencies {
                store: store.clone(),
                clock: clock.clone(),
                generator,
                admin_secret: Arc::new(SharedSecretVerifier::new(mocks::TEST_PASSWORD)),
                client: OAuthClient {
                    client_id: mocks::CLIENT_ID.into(),
                    redirect_uri: mocks::REDIRECT_URI.into(),
                    secret: Arc::new(SharedSecretVerifier::new(mocks::CLIENT_SECRET)),
                },
            },
            settings(),
            ProtectedPaths::new(prefixes.iter().copied()),
        )
        .expect("valid services"),
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let router = build_router_with_rate_limiter(state, rate_limit);

    TestApp {
        router,
        clock,
        store,
        services,
    }
}

pub async fn get(app: &axum::Router, uri: &str, session: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header(header::COOKIE, format!("access_token={token}"));
    }
    let req = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_form(app: &axum::Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// `POST /login` from the client at `ip`, as seen through a proxy.
pub async fn post_login_from(app: &axum::Router, ip: &str, password: &str) -> Response {
    let body = serde_urlencoded::to_string([("password", password)]).unwrap();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("x-forwarded-for", ip)
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Log in with the test password and return the session token from `Set-Cookie`.
pub async fn login(app: &axum::Router) -> String {
    let resp = post_form(app, "/login", &[("password", mocks::TEST_PASSWORD)]).await;
    session_cookie(&resp).expect("login sets the session cookie")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("response has a Location header")
}

pub fn set_cookie_header(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
}

/// Value of `access_token` in the response's `Set-Cookie`, if any.
pub fn session_cookie(resp: &Response) -> Option<String> {
    let raw = set_cookie_header(resp)?;
    let pair = raw.split(';').next()?;
    let value = pair.strip_prefix("access_token=")?;
    Some(value.to_string())
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

pub async fn text_body(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
