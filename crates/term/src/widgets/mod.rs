//! Presentational widgets. Each one is a pure function from inputs to cells.

pub mod button;
pub mod die;
pub mod field;
pub mod select;
pub mod toggle;

use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;

/// Box-drawing character set: corners clockwise from top-left, then edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_right: char,
    pub bottom_left: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const SINGLE: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_right: '┘',
    bottom_left: '└',
    horizontal: '─',
    vertical: '│',
};

pub const DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_right: '╗',
    bottom_right: '╝',
    bottom_left: '╚',
    horizontal: '═',
    vertical: '║',
};

pub const DASHED: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_right: '┘',
    bottom_left: '└',
    horizontal: '╌',
    vertical: '╎',
};

pub fn draw_border(fb: &mut FrameBuffer, rect: Rect, set: BorderSet, style: CellStyle) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let (x0, y0) = (rect.x, rect.y);
    let x1 = rect.right() - 1;
    let y1 = rect.bottom() - 1;

    fb.put_char(x0, y0, set.top_left, style);
    fb.put_char(x1, y0, set.top_right, style);
    fb.put_char(x0, y1, set.bottom_left, style);
    fb.put_char(x1, y1, set.bottom_right, style);
    for x in (x0 + 1)..x1 {
        fb.put_char(x, y0, set.horizontal, style);
        fb.put_char(x, y1, set.horizontal, style);
    }
    for y in (y0 + 1)..y1 {
        fb.put_char(x0, y, set.vertical, style);
        fb.put_char(x1, y, set.vertical, style);
    }
}

/// Pad or cut `s` to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_outlines_rect() {
        let mut fb = FrameBuffer::new(6, 4);
        draw_border(&mut fb, Rect::new(1, 0, 4, 3), SINGLE, CellStyle::default());
        assert_eq!(fb.row_text(0), " ┌──┐ ");
        assert_eq!(fb.row_text(1), " │  │ ");
        assert_eq!(fb.row_text(2), " └──┘ ");
        assert_eq!(fb.row_text(3), "      ");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("", 0), "");
    }
}
