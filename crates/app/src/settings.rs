//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory and from environment
//! variables prefixed with `EXPENSE_PEEK` (e.g. `EXPENSE_PEEK__APP__LEVEL`).
//!
//! See `settings.toml` for the configuration.
use config::{Config, ConfigError, Environment, File};
use engine::{DEFAULT_KEY, Range};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Where the expense slot lives.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Storage {
    Memory,
    /// Directory holding one JSON file per slot.
    File(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub storage: Storage,
    pub storage_key: String,
    pub range: Range,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: App::default(),
            storage: Storage::File("data".to_string()),
            storage_key: DEFAULT_KEY.to_string(),
            range: Range::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("settings").required(false))
                .add_source(Environment::with_prefix("EXPENSE_PEEK").separator("__"))
                .build()?,
        )
    }

    fn from_config(settings: Config) -> Result<Self, ConfigError> {
        settings.try_deserialize()
    }
}
