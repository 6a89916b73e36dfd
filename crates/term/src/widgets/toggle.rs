//! On/off switch. Holds no state; the engine flips the value on click.

use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;
use crate::theme::Palette;

pub const ON: &str = "(  ●)";
pub const OFF: &str = "(●  )";

pub fn draw_toggle(fb: &mut FrameBuffer, rect: Rect, on: bool, palette: &Palette) {
    let style = if on {
        CellStyle::new(palette.button_text, palette.accent).bold()
    } else {
        CellStyle::new(palette.disabled, palette.button)
    };
    let text = super::fit(if on { ON } else { OFF }, rect.w as usize);
    fb.put_str(rect.x, rect.y, &text, style);
}
