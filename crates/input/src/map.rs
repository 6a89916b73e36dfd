//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Rolling
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Roll),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),

        // Freezing by position
        KeyCode::Char(c @ '1'..='6') => Some(GameAction::ToggleFreeze(c as u8 - b'1')),
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(GameAction::FreezeCursor)
        }

        // Cursor and reordering
        KeyCode::Left | KeyCode::Char('h') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameAction::CursorRight),
        KeyCode::Char(',') | KeyCode::Char('<') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Char('.') | KeyCode::Char('>') | KeyCode::Char('L') => {
            Some(GameAction::MoveRight)
        }

        // Options
        KeyCode::Char('o') | KeyCode::Char('O') => Some(GameAction::ToggleOptions),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::ToggleLimit),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::CycleMaxRolls),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(GameAction::MoreDice),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(GameAction::FewerDice),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::CycleTheme),

        KeyCode::Esc => Some(GameAction::CloseOverlay),

        _ => None,
    }
}

/// Map keyboard input to edits of a focused text field.
pub fn handle_text_key(key: KeyEvent) -> Option<TextEdit> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(TextEdit::Insert(c)),
        KeyCode::Backspace | KeyCode::Delete => Some(TextEdit::Backspace),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => Some(TextEdit::Commit),
        _ => None,
    }
}

/// Ctrl-C, honored even while typing.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(key)
}
