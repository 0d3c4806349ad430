//! SteamTrade - a terminal storefront for Steam items.
//!
//! Browse the catalog, search the inventory and compare up to three
//! items side by side.

use anyhow::Context;
use steamtrade::{App, Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_or_default().context("failed to load configuration")?;

    // Logs go to a file; stdout belongs to the alternate screen.
    let log_dir = config.logging.resolve_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(&log_dir, "steamtrade.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    let mut app = App::new(config).context("failed to start terminal UI")?;
    app.run().await?;

    Ok(())
}
