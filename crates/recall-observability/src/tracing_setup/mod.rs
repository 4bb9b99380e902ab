//! Tracing setup. Logs always go to stderr so stdout stays machine-readable.

pub mod spans;

use std::sync::Once;

use recall_core::config::ObservabilityConfig;
use recall_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global subscriber.
///
/// `RECALL_LOG` takes precedence over `config.log_level`. Idempotent.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Initialize with an explicit filter string (for tests or embedding hosts).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);
        // A host may already have installed a subscriber; keep theirs.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
