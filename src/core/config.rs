// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{
    validate_length, CharacterClassSet, PasswordGenerationOptions, RevealOptions,
};

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_classes: CharacterClassSet,

    // Animation
    pub reveal_time_per_char: Duration,
    pub update_interval: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    /// Values that were set but ignored. Loading runs before the logger is
    /// up, so these are logged once it is.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_classes: CharacterClassSet::all(),

            // Animation
            reveal_time_per_char: Duration::from_millis(50),
            update_interval: Duration::from_millis(40),

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/passreveal.log"),

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => match validate_length(length) {
                    Ok(()) => config.default_password_length = length,
                    Err(e) => config.ignore(format!("DEFAULT_PASSWORD_LENGTH: {}", e)),
                },
                Err(_) => config.ignore(format!("DEFAULT_PASSWORD_LENGTH '{}': not a number", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_CHARACTER_CLASSES") {
            match val.parse::<CharacterClassSet>() {
                Ok(classes) => config.default_classes = classes,
                Err(e) => config.ignore(format!("DEFAULT_CHARACTER_CLASSES: {}", e)),
            }
        }

        // Animation
        if let Some(val) = lookup("REVEAL_TIME_PER_CHAR_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.reveal_time_per_char = Duration::from_millis(ms),
                Err(_) => config.ignore(format!("REVEAL_TIME_PER_CHAR_MS '{}': not a number", val)),
            }
        }

        if let Some(val) = lookup("UPDATE_INTERVAL_MS") {
            match val.parse::<u64>() {
                Ok(ms) if ms > 0 => config.update_interval = Duration::from_millis(ms),
                _ => config.ignore(format!("UPDATE_INTERVAL_MS '{}': expected milliseconds above 0", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.ignore(format!("LOG_LEVEL '{}': unknown level", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    fn ignore(&mut self, message: String) {
        self.warnings.push(format!("Ignoring {}", message));
    }

    /// Log everything [`Config::from_lookup`] had to ignore.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            classes: self.default_classes,
        }
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            reveal_time_per_char: self.reveal_time_per_char,
            update_interval: self.update_interval,
        }
    }
}
