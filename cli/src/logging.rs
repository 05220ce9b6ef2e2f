use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use sales_core::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Events go to the configured log file. When it cannot be opened they go
/// to stderr, or nowhere while the dashboard owns the terminal.
pub fn init(config: &LoggingConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let path = config.file_path();

    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let registry = tracing_subscriber::registry().with(filter);
    match file {
        Ok(file) => registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?,
        Err(_) if interactive => registry.with(fmt::layer().with_writer(io::sink)).try_init()?,
        Err(err) => {
            registry.with(fmt::layer().with_writer(io::stderr)).try_init()?;
            tracing::warn!(path = %path.display(), error = %err, "Cannot open log file, logging to stderr");
        }
    }
    Ok(())
}
