//! Mouse event mapping.
//!
//! Only the left button takes part in gestures; other buttons, scrolling and
//! bare movement are dropped.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::PointerKind;

/// A left-button pointer event at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

pub fn handle_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    let kind = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        column: ev.column,
        row: ev.row,
    })
}
