//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and display, making
//! them usable in any context (game state, application model, terminal rendering,
//! headless output).
//!
//! # Dice
//!
//! - **Faces**: stored as indices `0..=5`, displayed and scored as `1..=6`
//! - **Count**: between [`MIN_DICE`] and [`MAX_DICE`] dice per game
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `ROLL_DURATION_MS` | 1000 | Length of one roll animation |
//! | `ROLL_FRAME_MS` | 80 | Cadence of the cosmetic mid-roll re-randomization |
//!
//! # Examples
//!
//! ```
//! use tui_dice_types::{GameAction, MaxRollsSelection, Theme, FACE_COUNT, MAX_DICE};
//!
//! assert_eq!(FACE_COUNT, 6);
//! assert_eq!(MAX_DICE, 6);
//!
//! assert_eq!(Theme::from_str("ocean"), Some(Theme::Ocean));
//! assert_eq!(MaxRollsSelection::from_str("other"), Some(MaxRollsSelection::Other));
//! assert_eq!(GameAction::from_str("roll"), Some(GameAction::Roll));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of faces on a die. Face values are stored as `0..FACE_COUNT`.
pub const FACE_COUNT: u8 = 6;

/// Smallest number of dice in a game.
pub const MIN_DICE: u8 = 1;

/// Largest number of dice in a game.
pub const MAX_DICE: usize = 6;

/// Dice count used when nothing else is configured.
pub const DEFAULT_NUM_DICE: u8 = 5;

/// Roll ceiling offered by the fixed "3" choice.
pub const FIXED_MAX_ROLLS: u32 = 3;

/// Roll ceiling used when the custom value is missing, unparsable or not positive.
pub const DEFAULT_CUSTOM_MAX_ROLLS: u32 = 10;

/// Longest text accepted by the custom max-rolls field.
pub const CUSTOM_MAX_ROLLS_MAX_LEN: usize = 6;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Total duration of one roll.
pub const ROLL_DURATION_MS: u32 = 1000;

/// Interval between cosmetic re-randomizations while a roll is in progress.
pub const ROLL_FRAME_MS: u32 = 80;

/// Identity of a die within the current game (`0..num_dice`).
pub type DieId = u8;

/// Face index of a die (`0..FACE_COUNT`).
pub type Face = u8;

/// Which ceiling applies when the roll limit is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxRollsSelection {
    /// Fixed ceiling of [`FIXED_MAX_ROLLS`].
    #[default]
    Three,
    /// User supplied ceiling.
    Other,
}

impl MaxRollsSelection {
    pub const ALL: [MaxRollsSelection; 2] = [MaxRollsSelection::Three, MaxRollsSelection::Other];

    /// Parse selection from string (case-insensitive)
    ///
    /// ```
    /// use tui_dice_types::MaxRollsSelection;
    ///
    /// assert_eq!(MaxRollsSelection::from_str("3"), Some(MaxRollsSelection::Three));
    /// assert_eq!(MaxRollsSelection::from_str("Other"), Some(MaxRollsSelection::Other));
    /// assert_eq!(MaxRollsSelection::from_str("7"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "3" | "three" => Some(MaxRollsSelection::Three),
            "other" | "custom" => Some(MaxRollsSelection::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaxRollsSelection::Three => "3",
            MaxRollsSelection::Other => "other",
        }
    }

    /// Name shown in the max-rolls dropdown.
    pub const fn label(&self) -> &'static str {
        match self {
            MaxRollsSelection::Three => "3",
            MaxRollsSelection::Other => "Other",
        }
    }

    /// The next selection in display order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = MaxRollsSelection::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or(0);
        MaxRollsSelection::ALL[(idx + 1) % MaxRollsSelection::ALL.len()]
    }
}

impl fmt::Display for MaxRollsSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named background themes.
///
/// Each theme is a vertical two-color gradient; the colors themselves live with
/// the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Ocean,
    Sunset,
    Forest,
    Midnight,
    Candy,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Midnight,
        Theme::Candy,
    ];

    /// Parse theme from string (case-insensitive)
    ///
    /// ```
    /// use tui_dice_types::Theme;
    ///
    /// assert_eq!(Theme::from_str("SUNSET"), Some(Theme::Sunset));
    /// assert_eq!(Theme::from_str("plaid"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ocean" => Some(Theme::Ocean),
            "sunset" => Some(Theme::Sunset),
            "forest" => Some(Theme::Forest),
            "midnight" => Some(Theme::Midnight),
            "candy" => Some(Theme::Candy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Midnight => "midnight",
            Theme::Candy => "candy",
        }
    }

    /// Capitalized name for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Theme::Ocean => "Ocean",
            Theme::Sunset => "Sunset",
            Theme::Forest => "Forest",
            Theme::Midnight => "Midnight",
            Theme::Candy => "Candy",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Theme::ALL.iter().position(|t| t == self).unwrap_or(0);
        Theme::ALL[(idx + 1) % Theme::ALL.len()]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard-level commands understood by the application model.
///
/// Positional variants refer to the die's current position in the row, not its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a roll (ignored while rolling or at the roll limit)
    Roll,
    /// Start a new game with the current options
    NewGame,
    /// Show or hide the options panel
    ToggleOptions,
    /// Freeze/unfreeze the die at a position
    ToggleFreeze(u8),
    /// Freeze/unfreeze the die under the cursor
    FreezeCursor,
    /// Move the keyboard cursor one die left
    CursorLeft,
    /// Move the keyboard cursor one die right
    CursorRight,
    /// Move the die under the cursor one position left
    MoveLeft,
    /// Move the die under the cursor one position right
    MoveRight,
    /// Enable/disable the roll limit
    ToggleLimit,
    /// Switch between the fixed and custom roll ceiling
    CycleMaxRolls,
    /// Add one die (up to [`MAX_DICE`])
    MoreDice,
    /// Remove one die (down to [`MIN_DICE`])
    FewerDice,
    /// Switch to the next background theme
    CycleTheme,
    /// Close an open dropdown or leave the text field
    CloseOverlay,
}

impl GameAction {
    /// Parse a non-positional action from string (for scripted input)
    ///
    /// ```
    /// use tui_dice_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("cycleTheme"), Some(GameAction::CycleTheme));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "roll" => Some(GameAction::Roll),
            "newgame" => Some(GameAction::NewGame),
            "toggleoptions" => Some(GameAction::ToggleOptions),
            "freezecursor" => Some(GameAction::FreezeCursor),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "togglelimit" => Some(GameAction::ToggleLimit),
            "cyclemaxrolls" => Some(GameAction::CycleMaxRolls),
            "moredice" => Some(GameAction::MoreDice),
            "fewerdice" => Some(GameAction::FewerDice),
            "cycletheme" => Some(GameAction::CycleTheme),
            "closeoverlay" => Some(GameAction::CloseOverlay),
            _ => None,
        }
    }
}

/// Dropdowns shown in the options panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectId {
    NumDice,
    MaxRolls,
    Theme,
}

/// Something on screen that reacts to the pointer.
///
/// Produced by layout hit-testing and consumed by the application model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Die at a position in the row
    Die(u8),
    RollButton,
    NewGameButton,
    OptionsButton,
    LimitToggle,
    CustomMaxRolls,
    /// The closed face of a dropdown
    SelectButton(SelectId),
    /// An entry in an open dropdown list
    SelectItem(SelectId, u8),
}

impl Target {
    /// The dropdown this target belongs to, if any.
    pub fn select_id(&self) -> Option<SelectId> {
        match self {
            Target::SelectButton(id) | Target::SelectItem(id, _) => Some(*id),
            _ => None,
        }
    }
}

/// Pointer gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Drag,
    Up,
}

/// Edits to a focused text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Commit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(ROLL_DURATION_MS, 1000);
        assert_eq!(ROLL_FRAME_MS, 80);
        assert_eq!(FIXED_MAX_ROLLS, 3);
        assert_eq!(DEFAULT_CUSTOM_MAX_ROLLS, 10);
    }

    #[test]
    fn theme_cycle_visits_every_theme() {
        let mut t = Theme::default();
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(t);
            t = t.next();
        }
        assert_eq!(t, Theme::default());
        for theme in Theme::ALL {
            assert!(seen.contains(&theme), "missing theme {:?}", theme);
        }
    }

    #[test]
    fn max_rolls_selection_cycles_in_order() {
        let first = MaxRollsSelection::ALL[0];
        assert_eq!(first.next(), MaxRollsSelection::ALL[1]);
        assert_eq!(first.next().next(), first);
        assert_eq!(MaxRollsSelection::Other.label(), "Other");
    }

    #[test]
    fn theme_round_trips_through_str() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn select_item_reports_owner() {
        assert_eq!(
            Target::SelectItem(SelectId::Theme, 2).select_id(),
            Some(SelectId::Theme)
        );
        assert_eq!(Target::RollButton.select_id(), None);
    }
}
