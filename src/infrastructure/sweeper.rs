// src/infrastructure/sweeper.rs
use crate::application::broker::CredentialBroker;
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::MissedTickBehavior};

/// Periodically evict expired credentials. Returns `None` when `period` is zero.
///
/// The task runs until the handle is aborted.
pub fn spawn(broker: Arc<CredentialBroker>, period: Duration) -> Option<JoinHandle<()>> {
    if period.is_zero() {
        tracing::info!("credential sweeper disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = broker.sweep();
            if removed > 0 {
                tracing::info!(removed, "evicted expired credentials");
            } else {
                tracing::debug!("no expired credentials to evict");
            }
        }
    }))
}
