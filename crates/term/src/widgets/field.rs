use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;
use crate::theme::Palette;

pub const CARET: char = '▏';

/// Single-line text input. A caret follows the text while focused.
pub fn draw_field(fb: &mut FrameBuffer, rect: Rect, text: &str, focused: bool, palette: &Palette) {
    let mut style = CellStyle::new(palette.button_text, palette.button);
    if focused {
        style.bg = palette.die_face;
        style = style.bold();
    }
    let width = rect.w as usize;
    let mut shown: String = text.chars().take(width.saturating_sub(1)).collect();
    if focused {
        shown.push(CARET);
    }
    fb.put_str(rect.x, rect.y, &super::fit(&shown, width), style);
}
