use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// A missing or unparseable file falls back to defaults. On targets without a
/// filesystem (web) the read always fails, so defaults apply there too.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_or_default(&contents),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not readable ({e}), using defaults");
            AppConfig::default()
        }
    });
}

/// The loaded config, or defaults if `load_config()` hasn't run.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

fn parse_or_default(contents: &str) -> AppConfig {
    AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_level() {
        let config = parse_or_default("[logging]\nlevel = \"warn\"\n");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        assert_eq!(parse_or_default("not = [toml"), AppConfig::default());
    }

    #[test]
    fn app_config_never_panics() {
        assert!(!app_config().logging.level.is_empty());
    }
}
