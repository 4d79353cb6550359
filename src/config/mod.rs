//! Application configuration module
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `TAGBOT` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use tagbot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Chatting with {}", config.chat.bot);
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chat loop configuration (bot selection, prompt)
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Chat loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Which bot personality to chat with
    #[serde(default = "default_bot")]
    pub bot: String,

    /// Input prompt printed before each read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive (e.g. `info`, `tagbot=debug`)
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Log output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `TAGBOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TAGBOT__CHAT__BOT=teen-support` -> `chat.bot = "teen-support"`
    /// - `TAGBOT__LOG__FILTER=debug` -> `log.filter = "debug"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TAGBOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chat.bot.trim().is_empty() {
            return Err(ValidationError::EmptyBotName);
        }
        if self.log.filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot: default_bot(),
            prompt: default_prompt(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_bot() -> String {
    "office-hours".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}
