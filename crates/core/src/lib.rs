//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and roll timing.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every transition
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`die`]: Die, dice row and frozen set
//! - [`drag`]: Drag-and-drop state and reorder helper
//! - [`game_state`]: The game root; every state transition lives here
//! - [`options`]: Game options and the roll ceiling derived from them
//! - [`rng`]: Seedable face generation
//! - [`roll`]: The timed roll task
//! - [`scoring`]: Score calculation
//! - [`snapshot`]: Read-only copy of the observable state
//!
//! # Game Rules
//!
//! - Between 1 and 6 dice are dealt with random faces
//! - A roll lasts 1000ms; unfrozen dice churn every 80ms and settle at the end
//! - Dice can be frozen only after the first roll and never mid-roll
//! - The roll counter is capped when the roll limit is enabled
//! - Score is the pip total of the row
//! - Changing an option starts a new game
//!
//! # Example
//!
//! ```
//! use tui_dice_core::GameState;
//! use tui_dice_types::TICK_MS;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.roll_dice());
//!
//! while game.rolling() {
//!     game.tick(TICK_MS);
//! }
//!
//! let first = game.dice()[0].id;
//! assert!(game.toggle_freeze(first));
//! assert_eq!(game.current_roll(), 1);
//! ```

pub mod die;
pub mod drag;
pub mod game_state;
pub mod options;
pub mod rng;
pub mod roll;
pub mod scoring;
pub mod snapshot;

pub use tui_dice_types as types;

// Re-export commonly used items
pub use die::{Dice, Die, FrozenSet};
pub use drag::{move_item, DragState};
pub use game_state::GameState;
pub use options::{clamp_num_dice, parse_custom_max_rolls, GameOptions, MaxRolls};
pub use rng::DiceRng;
pub use roll::{RollProgress, RollTask};
pub use scoring::calculate_score;
pub use snapshot::{DieSnapshot, GameSnapshot};
