//! Drag-and-drop bookkeeping for reordering dice.

use crate::types::DieId;

/// Transient drag state: the die being dragged and the die currently hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DragState {
    pub dragged: Option<DieId>,
    pub over: Option<DieId>,
}

impl DragState {
    pub fn start(&mut self, id: DieId) {
        self.dragged = Some(id);
        self.over = None;
    }

    /// Record `id` as the drop target. Ignored without a source or when `id`
    /// is the source itself.
    pub fn enter(&mut self, id: DieId) -> bool {
        match self.dragged {
            Some(src) if src != id => {
                self.over = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.dragged = None;
        self.over = None;
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn is_dragging(&self, id: DieId) -> bool {
        self.dragged == Some(id)
    }

    pub fn is_over(&self, id: DieId) -> bool {
        self.over == Some(id)
    }
}

/// Move the element at `from` to index `to`, shifting the elements in between.
///
/// Remove-then-insert: the moved element ends up at `to`, and every other
/// element keeps its relative order.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}
