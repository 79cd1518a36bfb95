//! Tracing bootstrap for host applications

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise logs the store at debug level.
/// Call once at application startup.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myfish_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
