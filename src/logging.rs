//! Logging bootstrap.
//!
//! Desktop builds install a `tracing-subscriber` registry filtered by
//! `RUST_LOG` (default [`DEFAULT_FILTER`]). Web builds rely on the logger the
//! Dioxus launcher installs.

pub const DEFAULT_FILTER: &str = "project_board=info";

/// Installs the global subscriber. Safe to call more than once; later calls
/// are no-ops.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("logging initialized");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {}
