// src/cli/mod.rs
use clap::Parser;
use std::time::Duration;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

use crate::core::config::Config;
use crate::models::{validate_length, CharacterClassSet, OptionsError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Character types to use, comma separated (upper,lower,digits,symbols)
    #[arg(long, short)]
    pub classes: Option<CharacterClassSet>,

    /// Milliseconds each character shuffles before it locks
    #[arg(long)]
    pub reveal_ms: Option<u64>,

    /// Milliseconds between shuffle frames
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) -> Result<(), OptionsError> {
        if let Some(length) = self.length {
            validate_length(length)?;
            config.default_password_length = length;
        }

        if let Some(classes) = self.classes {
            config.default_classes = classes;
        }

        if let Some(ms) = self.reveal_ms {
            config.reveal_time_per_char = Duration::from_millis(ms);
        }

        if let Some(ms) = self.interval_ms {
            if ms == 0 {
                return Err(OptionsError::ZeroUpdateInterval);
            }
            config.update_interval = Duration::from_millis(ms);
        }

        Ok(())
    }
}
