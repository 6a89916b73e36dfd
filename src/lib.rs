//! Terminal dice game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_dice::{core,engine,input,term,types}` and adds the
//! pieces the binary needs: command-line parsing, logging setup and the
//! headless runner.

pub mod cli;
pub mod headless;
pub mod logging;

pub use tui_dice_core as core;
pub use tui_dice_engine as engine;
pub use tui_dice_input as input;
pub use tui_dice_term as term;
pub use tui_dice_types as types;
