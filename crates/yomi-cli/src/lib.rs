//! Command line frontends for the transliteration library.

use std::sync::Once;

pub mod commands;

static INIT: Once = Once::new();

/// Installs a stderr log subscriber. `RUST_LOG` overrides the default
/// filter, which only passes warnings from the core library.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("yomi_core=warn")),
            )
            .init();
    });
}
