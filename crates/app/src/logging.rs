use shared_types::{AppError, LoggingConfig};
use tracing::Level;

/// Environment variable that overrides `[logging] level` from `config.toml`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Resolve the log level: the environment override wins over the config file,
/// and anything unparseable falls back to `INFO`.
pub fn resolve_level(config: &LoggingConfig, env_override: Option<&str>) -> Level {
    let raw = env_override.unwrap_or(&config.level);
    raw.trim().parse::<Level>().unwrap_or_else(|_| {
        eprintln!("[logging] Unknown level {raw:?}, using info");
        Level::INFO
    })
}

/// Install the Dioxus logger (console on web, stdout elsewhere).
///
/// Dioxus owns the tracing subscriber; this only picks the level.
pub fn init(config: &LoggingConfig) -> Result<Level, AppError> {
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let level = resolve_level(config, env_level.as_deref());
    dioxus::logger::init(level)
        .map_err(|e| AppError::internal(format!("Failed to install logger: {e}")))?;
    Ok(level)
}
