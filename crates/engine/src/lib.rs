//! Application engine - the interactive model around the game state
//!
//! This crate owns everything between raw input and rendering that is not a
//! game rule: the options panel, dropdowns, the custom max-rolls text field,
//! keyboard cursor, pointer gestures and configuration. It performs no I/O,
//! so the whole interaction model is unit-testable.

pub mod app;
pub mod config;
pub mod pointer;
pub mod select;

pub use tui_dice_core as core;
pub use tui_dice_types as types;

pub use app::{App, AppView};
pub use config::{AppConfig, ConfigError};
pub use pointer::{Gesture, PointerTracker};
pub use select::{SelectOption, SelectState, SelectView};
