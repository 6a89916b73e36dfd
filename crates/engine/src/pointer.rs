//! Pointer gesture tracking: tells clicks from drags.
//!
//! A press on a die only becomes a drag once the pointer leaves that die, so
//! small jitter inside a die still counts as a click.

use crate::types::{DieId, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerTracker {
    /// Target under the pointer when the button went down.
    pressed: Option<Target>,
    /// Die that was under the pointer at press time.
    pressed_die: Option<DieId>,
    dragging: bool,
}

/// What a pointer event means for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    None,
    /// Press and release on the same target without dragging.
    Click(Target),
    /// A die started moving.
    DragStart(DieId),
    /// The pointer moved over a die while dragging.
    DragOver(Target),
    /// Released while dragging, over `Some(target)` or nothing.
    Drop(Option<Target>),
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, target: Option<Target>, die: Option<DieId>) {
        self.pressed = target;
        self.pressed_die = die;
        self.dragging = false;
    }

    pub fn moved(&mut self, target: Option<Target>) -> Gesture {
        if self.dragging {
            return match target {
                Some(t @ Target::Die(_)) => Gesture::DragOver(t),
                _ => Gesture::None,
            };
        }
        match (self.pressed_die, self.pressed) {
            (Some(id), Some(origin)) if target != Some(origin) => {
                self.dragging = true;
                Gesture::DragStart(id)
            }
            _ => Gesture::None,
        }
    }

    pub fn release(&mut self, target: Option<Target>) -> Gesture {
        let pressed = self.pressed.take();
        self.pressed_die = None;
        if std::mem::replace(&mut self.dragging, false) {
            return Gesture::Drop(target);
        }
        match (pressed, target) {
            (Some(p), Some(t)) if p == t => Gesture::Click(t),
            _ => Gesture::None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
