//! Tracing initialization.
//!
//! Call [`init_tracing`] once at process start. Safe to call from
//! multiple entry points (tests, batch runner); only the first call
//! installs the subscriber.

use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// The filter comes from the `TRELLIS_LOG` environment variable,
/// falling back to `trellis=info` when unset or malformed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRELLIS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("trellis=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
