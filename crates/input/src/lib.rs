//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s or text edits,
//! and mouse events into left-button [`mouse::PointerEvent`]s that the caller
//! hit-tests against the current layout.

pub mod map;
pub mod mouse;

pub use tui_dice_types as types;

pub use map::{handle_key_event, handle_text_key, is_interrupt, should_quit};
pub use mouse::{handle_mouse_event, PointerEvent};
