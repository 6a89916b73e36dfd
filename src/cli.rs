//! Command-line interface.
//!
//! Flags override whatever [`AppConfig::from_env`] picked up.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::{AppConfig, ConfigError};

/// Roll, freeze and reorder dice in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tui-dice", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of dice (1-6)
    #[arg(short, long, global = true)]
    pub dice: Option<i64>,

    /// Enable the roll limit
    #[arg(short, long, global = true)]
    pub limit: bool,

    /// Roll ceiling: 3, other, none, or a positive number
    #[arg(short, long, global = true)]
    pub max_rolls: Option<String>,

    /// Background theme (ocean, sunset, forest, midnight, candy)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    /// Fixed RNG seed for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Append logs to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play without a terminal UI and print each completed roll as JSON
    Headless {
        /// Rolls to perform (stops early at the roll limit)
        #[arg(short, long, default_value_t = 3)]
        rolls: u32,

        /// Positions (1-6) to freeze after the first roll
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        freeze: Vec<u8>,

        /// Log verbosity on stderr
        #[arg(long = "log-level", default_value = "warn")]
        log_level: tracing::Level,
    },
}

impl Cli {
    /// Merge flags over `base`.
    pub fn apply_to(&self, base: AppConfig) -> Result<AppConfig, ConfigError> {
        let mut config = base;
        if let Some(n) = self.dice {
            config.set_num_dice(n)?;
        }
        if self.limit {
            config.options.limit_enabled = true;
        }
        if let Some(v) = &self.max_rolls {
            config.set_max_rolls(v)?;
        }
        if let Some(name) = &self.theme {
            config.set_theme(name)?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.log_file.is_some() {
            config.log_path = self.log_file.clone();
        }
        Ok(config)
    }

    /// Environment first, then flags.
    pub fn config(&self) -> Result<AppConfig, ConfigError> {
        self.apply_to(AppConfig::from_env())
    }
}
