use crate::config::AppConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed tracing subscriber when debug logging is on.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
/// Without debug mode no subscriber is installed and tracing calls are no-ops.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    if !config.debug {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .wrap_err_with(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .wrap_err_with(|| format!("Invalid log filter: {}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install logger: {e}"))?;

    tracing::info!(log_file = %config.log_file.display(), "debug logging enabled");
    Ok(())
}
