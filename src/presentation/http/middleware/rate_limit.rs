// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// One login attempt is replenished every this many seconds.
const LOGIN_REPLENISH_SECS: u64 = 10;
const LOGIN_BURST: u32 = 20;

type LoginLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the login submission endpoint.
pub fn login_rate_limit_layer() -> LoginLimiter {
    static LOGIN_LIMITER: OnceLock<LoginLimiter> = OnceLock::new();

    LOGIN_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(LOGIN_REPLENISH_SECS);
            builder.burst_size(LOGIN_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid login rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
