//! Screen layout and pointer hit-testing.
//!
//! The same [`Layout`] drives drawing and hit-testing, so what the player
//! clicks is exactly what was drawn. Pure (no I/O).

use arrayvec::ArrayVec;

use crate::engine::select::MAX_SELECT_ITEMS;
use crate::engine::AppView;
use crate::types::{SelectId, Target, MAX_DICE};

/// Die width in terminal columns.
pub const DIE_W: u16 = 9;
/// Die height in terminal rows.
pub const DIE_H: u16 = 5;
/// Columns between dice.
pub const DIE_GAP: u16 = 2;

/// Width reserved for the widest dice row.
pub const CONTENT_W: u16 = MAX_DICE as u16 * DIE_W + (MAX_DICE as u16 - 1) * DIE_GAP;
/// Rows used by header, dice, buttons and a full options panel.
pub const CONTENT_H: u16 = 20;

pub const SELECT_W: u16 = 12;
pub const TOGGLE_W: u16 = 5;
pub const FIELD_W: u16 = 10;
const PANEL_LABEL_W: u16 = 12;
const PANEL_W: u16 = PANEL_LABEL_W + SELECT_W + 6;

pub const ROLL_LABEL: &str = "Roll";
pub const NEW_GAME_LABEL: &str = "New Game";
pub const OPTIONS_LABEL: &str = "Options";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.w
            && (y - self.y) < self.h
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn center_x(&self) -> u16 {
        self.x + self.w / 2
    }
}

/// One labelled control row in the options panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRow {
    pub label_x: u16,
    pub y: u16,
    pub label: &'static str,
    pub control: Rect,
    pub target: Target,
}

/// An open dropdown list drawn over everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLayout {
    pub id: SelectId,
    pub items: ArrayVec<Rect, MAX_SELECT_ITEMS>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub viewport: Viewport,
    pub content: Rect,
    pub title_y: u16,
    pub status_y: u16,
    pub dice: ArrayVec<Rect, MAX_DICE>,
    pub roll_button: Rect,
    pub new_game_button: Rect,
    pub options_button: Rect,
    pub panel: ArrayVec<PanelRow, 5>,
    pub dropdown: Option<DropdownLayout>,
    pub help_y: u16,
}

/// `[ label ]`
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

impl Layout {
    pub fn compute(view: &AppView, viewport: Viewport) -> Self {
        let content_x = viewport.width.saturating_sub(CONTENT_W) / 2;
        let content_y = viewport.height.saturating_sub(CONTENT_H) / 2;
        let content = Rect::new(content_x, content_y, CONTENT_W, CONTENT_H);

        let title_y = content_y;
        let status_y = content_y + 1;

        // Dice row, centered; one spare row above for the cursor marker.
        let n = view.game.dice.len() as u16;
        let row_w = if n == 0 {
            0
        } else {
            n * DIE_W + (n - 1) * DIE_GAP
        };
        let dice_x = content_x + CONTENT_W.saturating_sub(row_w) / 2;
        let dice_y = content_y + 4;
        let dice = (0..n)
            .map(|i| Rect::new(dice_x + i * (DIE_W + DIE_GAP), dice_y, DIE_W, DIE_H))
            .collect();

        // Buttons under the frozen-tag row.
        let buttons_y = dice_y + DIE_H + 2;
        let widths = [
            button_width(ROLL_LABEL),
            button_width(NEW_GAME_LABEL),
            button_width(OPTIONS_LABEL),
        ];
        let total: u16 = widths.iter().sum::<u16>() + 2 * 2;
        let mut bx = content_x + CONTENT_W.saturating_sub(total) / 2;
        let mut next_button = |w: u16| {
            let r = Rect::new(bx, buttons_y, w, 1);
            bx += w + 2;
            r
        };
        let roll_button = next_button(widths[0]);
        let new_game_button = next_button(widths[1]);
        let options_button = next_button(widths[2]);

        let mut panel = ArrayVec::new();
        if view.show_options {
            let label_x = content_x + CONTENT_W.saturating_sub(PANEL_W) / 2;
            let control_x = label_x + PANEL_LABEL_W;
            let mut y = buttons_y + 2;
            let mut row = |label: &'static str, w: u16, target: Target| {
                let r = PanelRow {
                    label_x,
                    y,
                    label,
                    control: Rect::new(control_x, y, w, 1),
                    target,
                };
                y += 1;
                r
            };
            panel.push(row("Dice", SELECT_W, Target::SelectButton(SelectId::NumDice)));
            panel.push(row("Roll limit", TOGGLE_W, Target::LimitToggle));
            if view.shows_max_rolls() {
                panel.push(row("Max rolls", SELECT_W, Target::SelectButton(SelectId::MaxRolls)));
            }
            if view.shows_custom_field() {
                panel.push(row("Custom max", FIELD_W, Target::CustomMaxRolls));
            }
            panel.push(row("Theme", SELECT_W, Target::SelectButton(SelectId::Theme)));
        }

        let dropdown = view.open_select().and_then(|sel| {
            let button = panel
                .iter()
                .find(|r| r.target == Target::SelectButton(sel.id))?
                .control;
            let items = (0..sel.items.len() as u16)
                .map(|i| Rect::new(button.x, button.y + 1 + i, button.w, 1))
                .collect();
            Some(DropdownLayout { id: sel.id, items })
        });

        Self {
            viewport,
            content,
            title_y,
            status_y,
            dice,
            roll_button,
            new_game_button,
            options_button,
            panel,
            dropdown,
            help_y: viewport.height.saturating_sub(1),
        }
    }

    /// What lies under terminal cell `(x, y)`. Dropdown lists win over
    /// anything they cover.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Target> {
        if let Some(dd) = &self.dropdown {
            if let Some(i) = dd.items.iter().position(|r| r.contains(x, y)) {
                return Some(Target::SelectItem(dd.id, i as u8));
            }
        }
        if let Some(i) = self.dice.iter().position(|r| r.contains(x, y)) {
            return Some(Target::Die(i as u8));
        }
        let buttons = [
            (self.roll_button, Target::RollButton),
            (self.new_game_button, Target::NewGameButton),
            (self.options_button, Target::OptionsButton),
        ];
        if let Some((_, t)) = buttons.iter().find(|(r, _)| r.contains(x, y)) {
            return Some(*t);
        }
        self.panel
            .iter()
            .find(|row| row.control.contains(x, y))
            .map(|row| row.target)
    }

    pub fn control(&self, target: Target) -> Option<Rect> {
        self.panel
            .iter()
            .find(|r| r.target == target)
            .map(|r| r.control)
    }
}
