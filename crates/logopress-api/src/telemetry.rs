use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filter and fmt layer.
///
/// `RUST_LOG` overrides the default filter. Production drops ANSI color
/// codes and quiets the default filter to info.
pub fn init_telemetry(production: bool) {
    let default_filter = if production {
        "logopress=info,tower_http=info"
    } else {
        "logopress=debug,tower_http=debug"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_ansi(!production))
        .init();
}
