//! Terminal "game renderer" for the dice table.
//!
//! A small rendering layer that draws into a framebuffer which is then
//! diff-flushed to the terminal. It deliberately avoids widget toolkits.
//!
//! Goals:
//! - Keep `core` and `engine` free of I/O
//! - Use one [`Layout`] for both drawing and pointer hit-testing
//! - Keep widgets as plain functions of their inputs

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod render_throttle;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use tui_dice_core as core;
pub use tui_dice_engine as engine;
pub use tui_dice_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use layout::{Layout, Rect, Viewport};
pub use render_throttle::{RenderThrottle, STATIC_RENDER_INTERVAL_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{palette, Palette};
