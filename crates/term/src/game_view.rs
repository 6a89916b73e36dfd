//! GameView: maps an `engine::AppView` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::AppView;
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::{Layout, Viewport, NEW_GAME_LABEL, OPTIONS_LABEL, ROLL_LABEL};
use crate::theme::{palette, Palette};
use crate::types::Target;
use crate::widgets::{button, die, field, select, toggle};

pub const TITLE: &str = "D I C E";
pub const CURSOR_MARK: char = '▼';
pub const HELP: &str =
    "r roll  n new  1-6 freeze  ←/→ cursor  ,/. move  o options  t theme  q quit";

/// A lightweight terminal renderer for the dice table.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_help: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render into an existing framebuffer and return the layout used, so
    /// pointer events can be hit-tested against exactly what was drawn.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, view: &AppView, viewport: Viewport, fb: &mut FrameBuffer) -> Layout {
        fb.resize(viewport.width, viewport.height);
        let pal = palette(view.theme);
        let layout = Layout::compute(view, viewport);

        for y in 0..viewport.height {
            let bg = pal.background(y, viewport.height);
            fb.fill_rect(0, y, viewport.width, 1, ' ', CellStyle::new(pal.text, bg));
        }

        self.draw_header(fb, view, &layout, &pal);
        self.draw_dice(fb, view, &layout, &pal);

        button::draw_button(fb, layout.roll_button, ROLL_LABEL, view.game.can_roll(), &pal);
        button::draw_button(fb, layout.new_game_button, NEW_GAME_LABEL, true, &pal);
        button::draw_button(fb, layout.options_button, OPTIONS_LABEL, true, &pal);

        self.draw_panel(fb, view, &layout, &pal);

        // Open list goes last so it covers the rows beneath it.
        if let Some(dd) = &layout.dropdown {
            select::draw_dropdown(fb, &dd.items, view.select(dd.id), &pal);
        }

        if self.show_help {
            fb.put_str_centered(viewport.width / 2, layout.help_y, HELP, pal.muted, false);
        }
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &AppView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, view: &AppView, layout: &Layout, pal: &Palette) {
        let cx = layout.content.center_x();
        let game = &view.game;
        fb.put_str_centered(cx, layout.title_y, TITLE, pal.accent, true);

        let status = format!(
            "Score: {}   Roll: {} / {}",
            game.score, game.current_roll, game.max_rolls
        );
        fb.put_str_centered(cx, layout.status_y, &status, pal.text, true);

        let note = if game.rolling {
            "Rolling..."
        } else if !game.can_roll() {
            "No rolls left. Start a new game."
        } else if !game.can_freeze() {
            "Roll to begin."
        } else {
            "Click a die to freeze it. Drag to reorder."
        };
        fb.put_str_centered(cx, layout.status_y + 1, note, pal.muted, false);
    }

    fn draw_dice(&self, fb: &mut FrameBuffer, view: &AppView, layout: &Layout, pal: &Palette) {
        for (rect, d) in layout.dice.iter().zip(view.game.dice.iter()) {
            die::draw_die(fb, *rect, d, pal);
        }
        if let Some(rect) = layout.dice.get(view.cursor) {
            fb.put_str_over(rect.center_x(), rect.y.saturating_sub(1), &CURSOR_MARK.to_string(), pal.accent, true);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, view: &AppView, layout: &Layout, pal: &Palette) {
        let options = &view.game.options;
        for row in &layout.panel {
            fb.put_str_over(row.label_x, row.y, row.label, pal.text, false);
            match row.target {
                Target::SelectButton(id) => {
                    select::draw_select_button(fb, row.control, view.select(id), pal)
                }
                Target::LimitToggle => {
                    toggle::draw_toggle(fb, row.control, options.limit_enabled, pal)
                }
                Target::CustomMaxRolls => field::draw_field(
                    fb,
                    row.control,
                    &options.custom_max_rolls,
                    view.editing_custom,
                    pal,
                ),
                _ => {}
            }
        }
    }
}
