//! Dropdown rendering: the closed face and the open list.

use crate::engine::SelectView;
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;
use crate::theme::Palette;

pub const ARROW_CLOSED: char = '▾';
pub const ARROW_OPEN: char = '▴';

pub fn draw_select_button(fb: &mut FrameBuffer, rect: Rect, view: &SelectView, palette: &Palette) {
    let style = CellStyle::new(palette.button_text, palette.button);
    let label_w = rect.w.saturating_sub(3) as usize;
    let arrow = if view.open { ARROW_OPEN } else { ARROW_CLOSED };
    let text = format!(" {}{} ", super::fit(&view.current_label, label_w), arrow);
    fb.put_str(rect.x, rect.y, &text, style);
}

/// Draw the open list; `items` are the row rectangles from layout.
pub fn draw_dropdown(fb: &mut FrameBuffer, items: &[Rect], view: &SelectView, palette: &Palette) {
    let normal = CellStyle::new(palette.button_text, palette.die_face);
    let selected = CellStyle::new(palette.button_text, palette.accent).bold();
    for (i, (rect, label)) in items.iter().zip(view.items.iter()).enumerate() {
        let style = if view.selected == Some(i) { selected } else { normal };
        let text = format!(" {}", super::fit(label, rect.w.saturating_sub(1) as usize));
        fb.put_str(rect.x, rect.y, &text, style);
    }
}
