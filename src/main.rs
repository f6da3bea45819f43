use anyhow::Result;
use dashgate::application::{
    broker::BrokerSettings,
    commands::OAuthClient,
    gate::ProtectedPaths,
    ports::{
        credential_store::CredentialStore,
        security::{SecretVerifier, TokenGenerator},
        time::Clock,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use dashgate::config::AppConfig;
use dashgate::infrastructure::{
    security::{
        credential_store::{self, InMemoryCredentialStore},
        secret::SharedSecretVerifier,
        token_generator::OsRngTokenGenerator,
    },
    sweeper,
    time::SystemClock,
};
use dashgate::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // loads `.env` first so RUST_LOG from it reaches the filter
    let config = AppConfig::from_env()?;
    init_tracing();

    let store: Arc<dyn CredentialStore> = credential_store::into_arc(InMemoryCredentialStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let generator: Arc<dyn TokenGenerator> = Arc::new(OsRngTokenGenerator);
    let admin_secret: Arc<dyn SecretVerifier> =
        Arc::new(SharedSecretVerifier::new(config.admin_password()));
    let client_secret: Arc<dyn SecretVerifier> =
        Arc::new(SharedSecretVerifier::new(config.oauth2_client_secret()));

    let services = Arc::new(ApplicationServices::new(
        ServiceDependencies {
            store,
            clock,
            generator,
            admin_secret,
            client: OAuthClient {
                client_id: config.oauth2_client_id().to_owned(),
                redirect_uri: config.oauth2_redirect_uri().to_owned(),
                secret: client_secret,
            },
        },
        BrokerSettings {
            auth_code_ttl: config.auth_code_ttl(),
            access_token_ttl: config.access_token_ttl(),
        },
        ProtectedPaths::new(config.protected_prefixes().iter().cloned()),
    )?);

    let sweeper = sweeper::spawn(services.broker(), config.sweep_interval());

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_rate_limiter(state, config.login_rate_limit());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        protected = ?config.protected_prefixes(),
        "listening on {address}"
    );

    let served = axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    served?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
