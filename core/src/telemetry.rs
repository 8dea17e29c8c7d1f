use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LOG_FILTER: &str = "greeter_core=info,bootstrap=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Timestamps and colors are left out since CloudWatch stamps each line on
/// ingestion and does not render ANSI codes.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time(),
        )
        .init();
}
