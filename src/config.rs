//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Nothing here writes to stdout, which belongs
//! to the interactive session.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the address book (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.book_path,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => defaults.log_level,
        };

        Ok(Config {
            book_path,
            log_level,
        })
    }

    /// Log level to use before the full configuration has been validated.
    ///
    /// Reads `LOG_LEVEL` like [`Config::from_env`] but falls back to the
    /// default instead of failing, so a bad configuration can still be logged.
    pub fn startup_log_level() -> String {
        let _ = dotenvy::dotenv();

        env::var("LOG_LEVEL")
            .ok()
            .and_then(|val| Self::parse_log_level(&val).ok())
            .unwrap_or_else(|| Config::default().log_level)
    }

    /// Normalize and validate a log level name.
    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("addressbook.json"),
            log_level: "error".to_string(),
        }
    }
}
