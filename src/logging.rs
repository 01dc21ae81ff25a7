//! Diagnostic logging.
//!
//! Events go to stderr so the report on stdout stays byte-exact. The
//! `RUST_LOG` environment variable takes precedence over config:
//!
//! ```bash
//! RUST_LOG=debug reckon
//! RUST_LOG=reckon::sqrt=trace reckon
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Build the filter: `RUST_LOG` if set, otherwise `config.default`.
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.default)
    }
}

/// Initialize logging. Only the first call takes effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .without_time()
            .with_filter(filter(config));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
