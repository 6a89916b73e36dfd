//! Application model: the game plus everything the screen needs to remember.
//!
//! `App` is the single mutator. Keyboard actions, text edits and pointer
//! gestures all arrive here and are turned into [`GameState`] calls or
//! UI-local changes (theme, options panel, dropdowns, cursor).

use tracing::info;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, RollProgress};
use crate::pointer::{Gesture, PointerTracker};
use crate::select::{
    SelectState, SelectView, MAX_ROLLS_OPTIONS, NUM_DICE_OPTIONS, THEME_OPTIONS,
};
use crate::types::{
    DieId, GameAction, MaxRollsSelection, PointerKind, SelectId, Target, TextEdit, Theme,
    CUSTOM_MAX_ROLLS_MAX_LEN,
};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppView {
    pub game: GameSnapshot,
    pub theme: Theme,
    pub show_options: bool,
    pub editing_custom: bool,
    pub cursor: usize,
    pub num_dice: SelectView,
    pub max_rolls: SelectView,
    pub theme_select: SelectView,
}

impl AppView {
    pub fn select(&self, id: SelectId) -> &SelectView {
        match id {
            SelectId::NumDice => &self.num_dice,
            SelectId::MaxRolls => &self.max_rolls,
            SelectId::Theme => &self.theme_select,
        }
    }

    /// The dropdown whose list is showing, if any.
    pub fn open_select(&self) -> Option<&SelectView> {
        [&self.num_dice, &self.max_rolls, &self.theme_select]
            .into_iter()
            .find(|s| s.open)
    }

    /// Whether the max-rolls dropdown is part of the options panel.
    pub fn shows_max_rolls(&self) -> bool {
        self.game.options.limit_enabled
    }

    /// Whether the custom max-rolls field is part of the options panel.
    pub fn shows_custom_field(&self) -> bool {
        self.game.options.limit_enabled
            && self.game.options.max_rolls_selection == MaxRollsSelection::Other
    }

    /// Hash of everything visible, for skipping redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

pub struct App {
    game: GameState,
    theme: Theme,
    show_options: bool,
    editing_custom: bool,
    cursor: usize,
    num_dice_select: SelectState<u8>,
    max_rolls_select: SelectState<MaxRollsSelection>,
    theme_select: SelectState<Theme>,
    pointer: PointerTracker,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_game(GameState::with_rng(config.options.clone(), config.rng()), config.theme)
    }

    pub fn with_game(game: GameState, theme: Theme) -> Self {
        Self {
            game,
            theme,
            show_options: false,
            editing_custom: false,
            cursor: 0,
            num_dice_select: SelectState::new(SelectId::NumDice, &NUM_DICE_OPTIONS),
            max_rolls_select: SelectState::new(SelectId::MaxRolls, &MAX_ROLLS_OPTIONS),
            theme_select: SelectState::new(SelectId::Theme, &THEME_OPTIONS),
            pointer: PointerTracker::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn show_options(&self) -> bool {
        self.show_options
    }

    pub fn editing_custom(&self) -> bool {
        self.editing_custom
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_select_open(&self, id: SelectId) -> bool {
        match id {
            SelectId::NumDice => self.num_dice_select.is_open(),
            SelectId::MaxRolls => self.max_rolls_select.is_open(),
            SelectId::Theme => self.theme_select.is_open(),
        }
    }

    /// Advance time.
    pub fn tick(&mut self, elapsed_ms: u32) -> RollProgress {
        self.game.tick(elapsed_ms)
    }

    /// Apply a keyboard command. Returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Roll => self.game.roll_dice(),
            GameAction::NewGame => {
                self.game.start_new_game();
                true
            }
            GameAction::ToggleOptions => {
                self.set_show_options(!self.show_options);
                true
            }
            GameAction::ToggleFreeze(pos) => self.toggle_freeze_at(pos as usize),
            GameAction::FreezeCursor => self.toggle_freeze_at(self.cursor),
            GameAction::CursorLeft => self.move_cursor(-1),
            GameAction::CursorRight => self.move_cursor(1),
            GameAction::MoveLeft => self.move_die_at_cursor(-1),
            GameAction::MoveRight => self.move_die_at_cursor(1),
            GameAction::ToggleLimit => self.set_limit_enabled(!self.game.options().limit_enabled),
            GameAction::CycleMaxRolls => {
                let next = self.game.options().max_rolls_selection.next();
                self.set_max_rolls_selection(next)
            }
            GameAction::MoreDice => self.set_num_dice(self.game.options().num_dice.saturating_add(1)),
            GameAction::FewerDice => self.set_num_dice(self.game.options().num_dice.saturating_sub(1)),
            GameAction::CycleTheme => {
                self.set_theme(self.theme.next());
                true
            }
            GameAction::CloseOverlay => self.close_overlays(),
        }
    }

    /// Edit the custom max-rolls field (only while it has focus).
    pub fn edit_custom(&mut self, edit: TextEdit) -> bool {
        if !self.editing_custom {
            return false;
        }
        let mut text = self.game.options().custom_max_rolls.clone();
        match edit {
            TextEdit::Insert(c) => {
                if c.is_control() || text.chars().count() >= CUSTOM_MAX_ROLLS_MAX_LEN {
                    return false;
                }
                text.push(c);
            }
            TextEdit::Backspace => {
                if text.pop().is_none() {
                    return false;
                }
            }
            TextEdit::Commit => {
                self.editing_custom = false;
                return true;
            }
        }
        self.game.set_custom_max_rolls(&text)
    }

    /// Handle a pointer event over `target` (`None` when over nothing).
    pub fn pointer(&mut self, kind: PointerKind, target: Option<Target>) -> bool {
        match kind {
            PointerKind::Down => {
                let mut changed = self.close_selects_outside(target);
                if self.editing_custom && target != Some(Target::CustomMaxRolls) {
                    self.editing_custom = false;
                    changed = true;
                }
                let die = match target {
                    Some(Target::Die(pos)) => self.id_at(pos as usize),
                    _ => None,
                };
                self.pointer.press(target, die);
                changed
            }
            PointerKind::Drag => match self.pointer.moved(target) {
                Gesture::DragStart(id) => {
                    let started = self.game.drag_start(id);
                    if let Some(Target::Die(pos)) = target {
                        self.drag_over(pos as usize);
                    }
                    started
                }
                Gesture::DragOver(Target::Die(pos)) => self.drag_over(pos as usize),
                _ => false,
            },
            PointerKind::Up => match self.pointer.release(target) {
                Gesture::Click(t) => self.activate(t),
                Gesture::Drop(Some(Target::Die(pos))) => match self.id_at(pos as usize) {
                    Some(id) => {
                        self.game.drop_on(id);
                        true
                    }
                    None => {
                        self.game.drag_end();
                        true
                    }
                },
                Gesture::Drop(_) => {
                    self.game.drag_end();
                    true
                }
                _ => false,
            },
        }
    }

    /// Abandon any gesture in progress (e.g. the layout moved under it).
    pub fn cancel_pointer(&mut self) {
        self.pointer.reset();
        self.game.drag_end();
    }

    /// Click on a target.
    fn activate(&mut self, target: Target) -> bool {
        match target {
            Target::Die(pos) => self.toggle_freeze_at(pos as usize),
            Target::RollButton => self.game.roll_dice(),
            Target::NewGameButton => {
                self.game.start_new_game();
                true
            }
            Target::OptionsButton => {
                self.set_show_options(!self.show_options);
                true
            }
            Target::LimitToggle => self.set_limit_enabled(!self.game.options().limit_enabled),
            Target::CustomMaxRolls => {
                self.editing_custom = true;
                true
            }
            Target::SelectButton(id) => {
                match id {
                    SelectId::NumDice => self.num_dice_select.toggle_open(),
                    SelectId::MaxRolls => self.max_rolls_select.toggle_open(),
                    SelectId::Theme => self.theme_select.toggle_open(),
                }
                true
            }
            Target::SelectItem(id, index) => self.choose(id, index as usize),
        }
    }

    fn choose(&mut self, id: SelectId, index: usize) -> bool {
        match id {
            SelectId::NumDice => {
                if let Some(n) = self.num_dice_select.choose(index) {
                    self.set_num_dice(n);
                }
            }
            SelectId::MaxRolls => {
                if let Some(sel) = self.max_rolls_select.choose(index) {
                    self.set_max_rolls_selection(sel);
                }
            }
            SelectId::Theme => {
                if let Some(theme) = self.theme_select.choose(index) {
                    self.set_theme(theme);
                }
            }
        }
        true
    }

    fn close_selects_outside(&mut self, target: Option<Target>) -> bool {
        let a = self.num_dice_select.on_pointer_down(target);
        let b = self.max_rolls_select.on_pointer_down(target);
        let c = self.theme_select.on_pointer_down(target);
        a || b || c
    }

    fn close_overlays(&mut self) -> bool {
        let a = self.num_dice_select.close();
        let b = self.max_rolls_select.close();
        let c = self.theme_select.close();
        let d = std::mem::replace(&mut self.editing_custom, false);
        a || b || c || d
    }

    fn set_show_options(&mut self, show: bool) {
        self.show_options = show;
        if !show {
            self.close_overlays();
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            info!(theme = %theme, "theme changed");
        }
        self.theme = theme;
    }

    fn set_num_dice(&mut self, n: u8) -> bool {
        let changed = self.game.set_num_dice(n);
        if changed {
            info!(num_dice = self.game.options().num_dice, "dice count changed");
        }
        self.cursor = self.cursor.min(self.game.dice().len().saturating_sub(1));
        changed
    }

    fn set_limit_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.game.set_limit_enabled(enabled);
        if changed {
            info!(enabled, "roll limit toggled");
        }
        if !enabled {
            self.max_rolls_select.close();
            self.editing_custom = false;
        }
        changed
    }

    fn set_max_rolls_selection(&mut self, selection: MaxRollsSelection) -> bool {
        let changed = self.game.set_max_rolls_selection(selection);
        if changed {
            info!(selection = %selection, "max rolls selection changed");
        }
        if selection != MaxRollsSelection::Other {
            self.editing_custom = false;
        }
        changed
    }

    fn id_at(&self, pos: usize) -> Option<DieId> {
        self.game.die_at(pos).map(|d| d.id)
    }

    fn toggle_freeze_at(&mut self, pos: usize) -> bool {
        match self.id_at(pos) {
            Some(id) => self.game.toggle_freeze(id),
            None => false,
        }
    }

    fn drag_over(&mut self, pos: usize) -> bool {
        match self.id_at(pos) {
            Some(id) => self.game.drag_enter(id),
            None => false,
        }
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.game.dice().len();
        let next = self.cursor as isize + delta;
        if next < 0 || next as usize >= len {
            return false;
        }
        self.cursor = next as usize;
        true
    }

    /// Keyboard reorder, routed through the same drag-and-drop path as the mouse.
    fn move_die_at_cursor(&mut self, delta: isize) -> bool {
        let target = self.cursor as isize + delta;
        if target < 0 || target as usize >= self.game.dice().len() {
            return false;
        }
        let (Some(src), Some(dst)) = (self.id_at(self.cursor), self.id_at(target as usize)) else {
            return false;
        };
        self.game.drag_start(src);
        self.game.drag_enter(dst);
        let moved = self.game.drop_on(dst);
        if moved {
            self.cursor = target as usize;
        }
        moved
    }

    pub fn view(&self) -> AppView {
        let options = self.game.options();
        AppView {
            game: self.game.snapshot(),
            theme: self.theme,
            show_options: self.show_options,
            editing_custom: self.editing_custom,
            cursor: self.cursor,
            num_dice: self.num_dice_select.view(options.num_dice),
            max_rolls: self.max_rolls_select.view(options.max_rolls_selection),
            theme_select: self.theme_select.view(self.theme),
        }
    }
}
