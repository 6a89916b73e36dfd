//! Die face rendering.
//!
//! A die is a 9x5 box; pips sit in the 7x3 interior on columns 1, 3 and 5.
//! The pips are hidden while the die is the drop target of a drag so the
//! player sees where the dragged die will land.

use crate::core::DieSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Rect;
use crate::theme::Palette;
use crate::types::Face;

use super::{draw_border, BorderSet, DASHED, DOUBLE, SINGLE};

pub const PIP: char = '●';
pub const FROZEN_TAG: &str = "FROZEN";

const PIPS_1: &[(u16, u16)] = &[(3, 1)];
const PIPS_2: &[(u16, u16)] = &[(1, 0), (5, 2)];
const PIPS_3: &[(u16, u16)] = &[(1, 0), (3, 1), (5, 2)];
const PIPS_4: &[(u16, u16)] = &[(1, 0), (5, 0), (1, 2), (5, 2)];
const PIPS_5: &[(u16, u16)] = &[(1, 0), (5, 0), (3, 1), (1, 2), (5, 2)];
const PIPS_6: &[(u16, u16)] = &[(1, 0), (3, 0), (5, 0), (1, 2), (3, 2), (5, 2)];

/// Interior coordinates of the pips for a face index (`0` shows one pip).
pub fn pip_cells(face: Face) -> &'static [(u16, u16)] {
    match face {
        0 => PIPS_1,
        1 => PIPS_2,
        2 => PIPS_3,
        3 => PIPS_4,
        4 => PIPS_5,
        _ => PIPS_6,
    }
}

fn border_for(die: &DieSnapshot) -> BorderSet {
    if die.drag_over {
        DASHED
    } else if die.frozen {
        DOUBLE
    } else {
        SINGLE
    }
}

pub fn draw_die(fb: &mut FrameBuffer, rect: Rect, die: &DieSnapshot, palette: &Palette) {
    let mut body = CellStyle::new(palette.pip, palette.die_face);
    if die.dragging {
        body = body.dim();
    }
    fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', body);

    let mut edge = body;
    if die.frozen {
        edge.fg = palette.frozen;
        edge = edge.bold();
    } else if die.drag_over {
        edge.fg = palette.accent;
    }
    draw_border(fb, rect, border_for(die), edge);

    if !die.drag_over {
        for &(px, py) in pip_cells(die.value) {
            fb.put_char(rect.x + 1 + px, rect.y + 1 + py, PIP, body);
        }
    }

    if die.frozen {
        fb.put_str_centered(rect.center_x(), rect.bottom(), FROZEN_TAG, palette.frozen, true);
    }
}
