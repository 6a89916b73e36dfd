//! Application configuration.
//!
//! Environment variables are read leniently: a value that does not parse is
//! ignored and the default is kept. Explicit setters (used for command-line
//! flags) are strict and report a [`ConfigError`].
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DICE_NUM` | Dice count (1-6) |
//! | `DICE_LIMIT` | `1`/`true` enables the roll limit |
//! | `DICE_MAX_ROLLS` | `3`, `other`, a positive number, or `none` |
//! | `DICE_THEME` | Theme name |
//! | `DICE_SEED` | RNG seed |
//! | `DICE_LOG_PATH` | Write logs to this file |

use std::path::PathBuf;

use thiserror::Error;

use crate::core::{DiceRng, GameOptions};
use crate::types::{MaxRollsSelection, Theme, MAX_DICE, MIN_DICE};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dice count must be between {min} and {max}, got {value}")]
    DiceOutOfRange { value: i64, min: u8, max: u8 },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("invalid max rolls: {0} (expected 3, other, none, or a positive number)")]
    InvalidMaxRolls(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub options: GameOptions,
    pub theme: Theme,
    /// Fixed RNG seed; random when `None`.
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(n) = lookup("DICE_NUM").and_then(|s| s.trim().parse::<i64>().ok()) {
            let _ = config.set_num_dice(n);
        }
        if let Some(v) = lookup("DICE_LIMIT") {
            config.options.limit_enabled = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("DICE_MAX_ROLLS") {
            let _ = config.set_max_rolls(&v);
        }
        if let Some(v) = lookup("DICE_THEME") {
            let _ = config.set_theme(&v);
        }
        config.seed = lookup("DICE_SEED").and_then(|s| s.trim().parse().ok());
        config.log_path = lookup("DICE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        config
    }

    pub fn set_num_dice(&mut self, n: i64) -> Result<(), ConfigError> {
        if n < i64::from(MIN_DICE) || n > MAX_DICE as i64 {
            return Err(ConfigError::DiceOutOfRange {
                value: n,
                min: MIN_DICE,
                max: MAX_DICE as u8,
            });
        }
        self.options.num_dice = n as u8;
        Ok(())
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), ConfigError> {
        self.theme = Theme::from_str(name).ok_or_else(|| ConfigError::UnknownTheme(name.to_string()))?;
        Ok(())
    }

    /// Configure the roll ceiling from one value.
    ///
    /// `none` disables the limit; `3` and `other` pick the selection; any other
    /// positive number selects a custom ceiling of that value.
    pub fn set_max_rolls(&mut self, value: &str) -> Result<(), ConfigError> {
        let v = value.trim();
        if matches!(v.to_lowercase().as_str(), "none" | "off" | "unlimited") {
            self.options.limit_enabled = false;
            return Ok(());
        }
        if let Some(selection) = MaxRollsSelection::from_str(v) {
            self.options.limit_enabled = true;
            self.options.max_rolls_selection = selection;
            return Ok(());
        }
        match v.parse::<u32>() {
            Ok(n) if n >= 1 => {
                self.options.limit_enabled = true;
                self.options.max_rolls_selection = MaxRollsSelection::Other;
                self.options.custom_max_rolls = n.to_string();
                Ok(())
            }
            _ => Err(ConfigError::InvalidMaxRolls(value.to_string())),
        }
    }

    pub fn rng(&self) -> DiceRng {
        match self.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MaxRolls;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let c = AppConfig::from_lookup(|_| None);
        assert_eq!(c, AppConfig::default());
        assert_eq!(c.options.num_dice, 5);
        assert_eq!(c.options.max_rolls(), MaxRolls::Unbounded);
    }

    #[test]
    fn env_values_apply() {
        let c = AppConfig::from_lookup(lookup(&[
            ("DICE_NUM", "3"),
            ("DICE_MAX_ROLLS", "7"),
            ("DICE_THEME", "forest"),
            ("DICE_SEED", "42"),
            ("DICE_LOG_PATH", " /tmp/dice.log "),
        ]));
        assert_eq!(c.options.num_dice, 3);
        assert_eq!(c.options.max_rolls(), MaxRolls::Limited(7));
        assert_eq!(c.theme, Theme::Forest);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/dice.log")));
    }

    #[test]
    fn invalid_env_values_keep_defaults() {
        let c = AppConfig::from_lookup(lookup(&[
            ("DICE_NUM", "12"),
            ("DICE_THEME", "plaid"),
            ("DICE_SEED", "x"),
            ("DICE_LOG_PATH", "  "),
        ]));
        assert_eq!(c.options.num_dice, 5);
        assert_eq!(c.theme, Theme::default());
        assert_eq!(c.seed, None);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn strict_setters_report_errors() {
        let mut c = AppConfig::default();
        assert_eq!(
            c.set_num_dice(0),
            Err(ConfigError::DiceOutOfRange {
                value: 0,
                min: 1,
                max: 6
            })
        );
        assert_eq!(
            c.set_theme("plaid"),
            Err(ConfigError::UnknownTheme("plaid".into()))
        );
        assert!(matches!(
            c.set_max_rolls("-2"),
            Err(ConfigError::InvalidMaxRolls(_))
        ));
    }

    #[test]
    fn max_rolls_none_disables_limit() {
        let mut c = AppConfig::default();
        c.set_max_rolls("3").unwrap();
        assert_eq!(c.options.max_rolls(), MaxRolls::Limited(3));
        c.set_max_rolls("none").unwrap();
        assert_eq!(c.options.max_rolls(), MaxRolls::Unbounded);
    }

    #[test]
    fn error_messages_read_well() {
        let e = ConfigError::DiceOutOfRange {
            value: 9,
            min: 1,
            max: 6,
        };
        assert_eq!(e.to_string(), "dice count must be between 1 and 6, got 9");
    }
}
