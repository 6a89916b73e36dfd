use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;
use crate::theme::Palette;

/// Draw `[ label ]` filling `rect`'s first row. Disabled buttons are greyed out.
pub fn draw_button(fb: &mut FrameBuffer, rect: Rect, label: &str, enabled: bool, palette: &Palette) {
    let style = if enabled {
        CellStyle::new(palette.button_text, palette.button).bold()
    } else {
        CellStyle::new(palette.disabled, palette.button).dim()
    };
    let inner = rect.w.saturating_sub(4) as usize;
    let text = format!("[ {} ]", super::fit(label, inner));
    fb.put_str(rect.x, rect.y, &text, style);
}
