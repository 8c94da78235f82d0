use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "menu-tui.log";
const DEFAULT_LOG_FILTER: &str = "debug";

/// Runtime settings gathered from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub debug: bool,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds a config from a variable lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let debug = lookup("DEBUG").is_some_and(|value| is_truthy(&value));
        let log_file = lookup("MENU_LOG_FILE")
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.log_file, PathBuf::from);
        let log_filter = lookup("MENU_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            debug,
            log_file,
            log_filter,
        }
    }
}

/// Loads `.env` (if any) and reads the application configuration.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
