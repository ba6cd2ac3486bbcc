use eyre::WrapErr;
use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Setup logging and error reporting
///
/// `RUST_LOG` takes precedence over the default level when it is set.
pub fn init(default_level: Level) -> eyre::Result<()> {
    let debug = cfg!(debug_assertions);

    Registry::default()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(debug)
                .with_line_number(debug)
                .with_target(true),
        )
        .with(ErrorLayer::default())
        .try_init()
        .wrap_err("failed to install the tracing subscriber")
}
