//! JSON logging for CloudWatch.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable: lead intake events at
/// `info`, AWS SDK and runtime chatter at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,leadintake=info";

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the JSON subscriber. Call once from `run()` before serving events.
pub fn init_tracing() {
    let directives = std::env::var("RUST_LOG").ok();
    let filter = log_filter(directives.as_deref());

    let json_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(true)
        .with_level(true)
        .with_current_span(false);

    // A subscriber may already be installed when tests share a process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .try_init();
}
