//! Game options and the roll ceiling derived from them.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::types::{
    MaxRollsSelection, DEFAULT_CUSTOM_MAX_ROLLS, DEFAULT_NUM_DICE, FIXED_MAX_ROLLS, MAX_DICE,
    MIN_DICE,
};

/// Effective roll ceiling for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxRolls {
    Unbounded,
    /// Always at least 1.
    Limited(u32),
}

impl MaxRolls {
    /// Whether another roll may start after `current_roll` rolls.
    pub fn allows(&self, current_roll: u32) -> bool {
        match self {
            MaxRolls::Unbounded => true,
            MaxRolls::Limited(max) => current_roll < *max,
        }
    }

    pub fn limit(&self) -> Option<u32> {
        match self {
            MaxRolls::Unbounded => None,
            MaxRolls::Limited(max) => Some(*max),
        }
    }
}

impl fmt::Display for MaxRolls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxRolls::Unbounded => f.write_str("∞"),
            MaxRolls::Limited(max) => write!(f, "{}", max),
        }
    }
}

// Serialized as `null` or the ceiling.
impl Serialize for MaxRolls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.limit().serialize(serializer)
    }
}

/// Parse the custom ceiling as typed by the user.
///
/// Unparsable text and non-positive values fall back to
/// [`DEFAULT_CUSTOM_MAX_ROLLS`].
///
/// ```
/// use tui_dice_core::parse_custom_max_rolls;
///
/// assert_eq!(parse_custom_max_rolls("7"), 7);
/// assert_eq!(parse_custom_max_rolls(" 12 "), 12);
/// assert_eq!(parse_custom_max_rolls("abc"), 10);
/// assert_eq!(parse_custom_max_rolls("0"), 10);
/// assert_eq!(parse_custom_max_rolls("-4"), 10);
/// ```
pub fn parse_custom_max_rolls(text: &str) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => DEFAULT_CUSTOM_MAX_ROLLS,
    }
}

/// Clamp a requested dice count into `MIN_DICE..=MAX_DICE`.
pub fn clamp_num_dice(n: u8) -> u8 {
    n.clamp(MIN_DICE, MAX_DICE as u8)
}

/// Options that shape a game. Changing any of them starts a new game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOptions {
    pub num_dice: u8,
    pub limit_enabled: bool,
    pub max_rolls_selection: MaxRollsSelection,
    /// Raw text of the custom ceiling field; parsed on use.
    pub custom_max_rolls: String,
}

impl GameOptions {
    /// Ceiling implied by these options.
    pub fn max_rolls(&self) -> MaxRolls {
        if !self.limit_enabled {
            return MaxRolls::Unbounded;
        }
        match self.max_rolls_selection {
            MaxRollsSelection::Three => MaxRolls::Limited(FIXED_MAX_ROLLS),
            MaxRollsSelection::Other => {
                MaxRolls::Limited(parse_custom_max_rolls(&self.custom_max_rolls))
            }
        }
    }

    /// Copy with the dice count forced into range.
    pub fn normalized(mut self) -> Self {
        self.num_dice = clamp_num_dice(self.num_dice);
        self
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            num_dice: DEFAULT_NUM_DICE,
            limit_enabled: false,
            max_rolls_selection: MaxRollsSelection::Three,
            custom_max_rolls: DEFAULT_CUSTOM_MAX_ROLLS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_disabled_is_unbounded() {
        let opts = GameOptions {
            limit_enabled: false,
            max_rolls_selection: MaxRollsSelection::Other,
            custom_max_rolls: "2".into(),
            ..GameOptions::default()
        };
        assert_eq!(opts.max_rolls(), MaxRolls::Unbounded);
        assert!(opts.max_rolls().allows(u32::MAX - 1));
    }

    #[test]
    fn fixed_choice_is_three() {
        let opts = GameOptions {
            limit_enabled: true,
            ..GameOptions::default()
        };
        assert_eq!(opts.max_rolls(), MaxRolls::Limited(3));
    }

    #[test]
    fn custom_choice_parses_text() {
        let mut opts = GameOptions {
            limit_enabled: true,
            max_rolls_selection: MaxRollsSelection::Other,
            custom_max_rolls: "5".into(),
            ..GameOptions::default()
        };
        assert_eq!(opts.max_rolls(), MaxRolls::Limited(5));

        opts.custom_max_rolls = "abc".into();
        assert_eq!(opts.max_rolls(), MaxRolls::Limited(10));

        opts.custom_max_rolls.clear();
        assert_eq!(opts.max_rolls(), MaxRolls::Limited(10));
    }

    #[test]
    fn huge_custom_value_saturates() {
        assert_eq!(parse_custom_max_rolls("99999999999"), u32::MAX);
    }

    #[test]
    fn allows_stops_at_ceiling() {
        let max = MaxRolls::Limited(3);
        assert!(max.allows(2));
        assert!(!max.allows(3));
    }

    #[test]
    fn normalized_clamps_dice_count() {
        let opts = GameOptions {
            num_dice: 0,
            ..GameOptions::default()
        };
        assert_eq!(opts.normalized().num_dice, 1);
        let opts = GameOptions {
            num_dice: 40,
            ..GameOptions::default()
        };
        assert_eq!(opts.normalized().num_dice, 6);
    }

    #[test]
    fn max_rolls_serializes_as_optional_number() {
        assert_eq!(serde_json::to_string(&MaxRolls::Unbounded).unwrap(), "null");
        assert_eq!(serde_json::to_string(&MaxRolls::Limited(3)).unwrap(), "3");
    }
}
