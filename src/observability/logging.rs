//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Honor the configured level, with `RUST_LOG` taking precedence
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Called once at startup, before any subsystem emits events

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// The configured level applies to this crate and the HTTP middleware;
/// `RUST_LOG` overrides it entirely when set.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "waypost={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
