//! Game state module - owns the dice row and every transition on it
//!
//! This module ties together the dice, frozen set, roll task, drag state and
//! scoring. It handles game timing (roll animation), option changes, and the
//! new-game lifecycle.

use tracing::{debug, info};

use crate::die::{Dice, Die, FrozenSet};
use crate::drag::{move_item, DragState};
use crate::options::{clamp_num_dice, GameOptions, MaxRolls};
use crate::rng::DiceRng;
use crate::roll::{RollProgress, RollTask};
use crate::scoring::calculate_score;
use crate::snapshot::{DieSnapshot, GameSnapshot};
use crate::types::{DieId, MaxRollsSelection, CUSTOM_MAX_ROLLS_MAX_LEN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    options: GameOptions,
    /// Ceiling computed when the current game started.
    max_rolls: MaxRolls,
    dice: Dice,
    frozen: FrozenSet,
    current_roll: u32,
    score: u32,
    /// In-flight roll, if any. Dropping it cancels the animation.
    roll: Option<RollTask>,
    drag: DragState,
    rng: DiceRng,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
}

impl GameState {
    /// Create a game with default options and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameOptions::default(), DiceRng::new(seed))
    }

    pub fn with_options(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, DiceRng::new(seed))
    }

    /// Create a game and deal the first row of dice.
    pub fn with_rng(options: GameOptions, rng: DiceRng) -> Self {
        let options = options.normalized();
        let mut state = Self {
            max_rolls: options.max_rolls(),
            options,
            dice: Dice::new(),
            frozen: FrozenSet::empty(),
            current_roll: 0,
            score: 0,
            roll: None,
            drag: DragState::default(),
            rng,
            game_id: 0,
        };
        state.start_new_game();
        state
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn max_rolls(&self) -> MaxRolls {
        self.max_rolls
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn frozen(&self) -> FrozenSet {
        self.frozen
    }

    pub fn is_frozen(&self, id: DieId) -> bool {
        self.frozen.contains(id)
    }

    pub fn current_roll(&self) -> u32 {
        self.current_roll
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rolling(&self) -> bool {
        self.roll.is_some()
    }

    pub fn roll_task(&self) -> Option<&RollTask> {
        self.roll.as_ref()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of die `id` in the row.
    pub fn position_of(&self, id: DieId) -> Option<usize> {
        self.dice.iter().position(|d| d.id == id)
    }

    /// Die at a row position.
    pub fn die_at(&self, pos: usize) -> Option<Die> {
        self.dice.get(pos).copied()
    }

    /// Whether a roll may start now.
    pub fn can_roll(&self) -> bool {
        self.roll.is_none() && self.max_rolls.allows(self.current_roll)
    }

    /// Whether freezing is currently allowed.
    pub fn can_freeze(&self) -> bool {
        self.roll.is_none() && self.current_roll > 0
    }

    /// Deal a fresh row from the current options.
    ///
    /// Cancels any in-flight roll, clears frozen and drag state and resets the
    /// roll counter.
    pub fn start_new_game(&mut self) {
        if self.roll.take().is_some() {
            debug!(game_id = self.game_id, "in-flight roll cancelled by new game");
        }

        self.max_rolls = self.options.max_rolls();
        self.dice.clear();
        for id in 0..self.options.num_dice {
            let value = self.rng.roll_face();
            self.dice.push(Die::new(id, value));
        }
        self.frozen.clear();
        self.drag.clear();
        self.current_roll = 0;
        self.score = calculate_score(&self.dice);
        self.game_id = self.game_id.wrapping_add(1);

        info!(
            game_id = self.game_id,
            num_dice = self.options.num_dice,
            max_rolls = %self.max_rolls,
            score = self.score,
            "new game"
        );
    }

    /// Begin a roll. Returns `false` when rolling is not allowed.
    ///
    /// The roll counter increments immediately; dice values settle when
    /// [`GameState::tick`] reports completion.
    pub fn roll_dice(&mut self) -> bool {
        if !self.can_roll() {
            return false;
        }
        self.current_roll += 1;
        self.roll = Some(RollTask::new(self.frozen));
        debug!(
            game_id = self.game_id,
            roll = self.current_roll,
            frozen = self.frozen.len(),
            "roll started"
        );
        true
    }

    /// Advance time by `elapsed_ms`, driving the roll animation.
    pub fn tick(&mut self, elapsed_ms: u32) -> RollProgress {
        let Some(task) = self.roll.as_mut() else {
            return RollProgress::default();
        };
        let progress = task.advance(elapsed_ms);
        let frozen = task.frozen();
        debug_assert_eq!(frozen, self.frozen);

        if progress.frames > 0 && !progress.finished {
            self.rerandomize(frozen);
        }

        if progress.finished {
            self.roll = None;
            self.rerandomize(self.frozen);
            self.score = calculate_score(&self.dice);
            debug!(
                game_id = self.game_id,
                roll = self.current_roll,
                score = self.score,
                "roll finished"
            );
        }

        progress
    }

    /// Run an in-flight roll to completion immediately.
    pub fn finish_roll(&mut self) -> RollProgress {
        match self.roll.as_ref() {
            Some(task) => self.tick(task.remaining_ms()),
            None => RollProgress::default(),
        }
    }

    fn rerandomize(&mut self, frozen: FrozenSet) {
        for die in self.dice.iter_mut() {
            if !frozen.contains(die.id) {
                die.value = self.rng.roll_face();
            }
        }
    }

    /// Freeze or unfreeze die `id`.
    ///
    /// Ignored while rolling, before the first roll, and for ids not in play.
    pub fn toggle_freeze(&mut self, id: DieId) -> bool {
        if !self.can_freeze() || self.position_of(id).is_none() {
            return false;
        }
        let frozen = self.frozen.toggle(id);
        debug!(game_id = self.game_id, id, frozen, "freeze toggled");
        true
    }

    /// Begin dragging die `id`.
    pub fn drag_start(&mut self, id: DieId) -> bool {
        if self.position_of(id).is_none() {
            return false;
        }
        self.drag.start(id);
        true
    }

    /// Pointer entered die `id` while dragging.
    pub fn drag_enter(&mut self, id: DieId) -> bool {
        if self.position_of(id).is_none() {
            return false;
        }
        self.drag.enter(id)
    }

    /// Drop the dragged die onto die `target`, moving it to the target's position.
    ///
    /// Always ends the drag. Returns whether the row changed.
    pub fn drop_on(&mut self, target: DieId) -> bool {
        let dragged = self.drag.dragged;
        self.drag.clear();

        let Some(src) = dragged else {
            return false;
        };
        if src == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position_of(src), self.position_of(target)) else {
            return false;
        };

        let moved = move_item(&mut self.dice, from, to);
        if moved {
            debug!(game_id = self.game_id, id = src, from, to, "die moved");
        }
        moved
    }

    /// Drag cancelled or finished.
    pub fn drag_end(&mut self) {
        self.drag.clear();
    }

    pub fn set_num_dice(&mut self, n: u8) -> bool {
        let n = clamp_num_dice(n);
        if self.options.num_dice == n {
            return false;
        }
        self.options.num_dice = n;
        self.start_new_game();
        true
    }

    pub fn set_limit_enabled(&mut self, enabled: bool) -> bool {
        if self.options.limit_enabled == enabled {
            return false;
        }
        self.options.limit_enabled = enabled;
        self.start_new_game();
        true
    }

    pub fn set_max_rolls_selection(&mut self, selection: MaxRollsSelection) -> bool {
        if self.options.max_rolls_selection == selection {
            return false;
        }
        self.options.max_rolls_selection = selection;
        self.start_new_game();
        true
    }

    /// Replace the custom ceiling text. Text longer than the field allows is truncated.
    pub fn set_custom_max_rolls(&mut self, text: &str) -> bool {
        let text: String = text.chars().take(CUSTOM_MAX_ROLLS_MAX_LEN).collect();
        if self.options.custom_max_rolls == text {
            return false;
        }
        self.options.custom_max_rolls = text;
        self.start_new_game();
        true
    }

    /// Copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.game_id = self.game_id;
        out.seed = self.rng.seed();
        for die in self.dice.iter() {
            out.dice.push(DieSnapshot {
                id: die.id,
                value: die.value,
                frozen: self.frozen.contains(die.id),
                dragging: self.drag.is_dragging(die.id),
                drag_over: self.drag.is_over(die.id),
            });
        }
        out.current_roll = self.current_roll;
        out.max_rolls = self.max_rolls;
        out.score = self.score;
        out.rolling = self.roll.is_some();
        out.roll_elapsed_ms = self.roll.map(|t| t.elapsed_ms()).unwrap_or(0);
        out.options.clone_from(&self.options);
    }

    #[cfg(test)]
    pub(crate) fn set_values(&mut self, values: &[u8]) {
        for (die, &v) in self.dice.iter_mut().zip(values) {
            die.value = v;
        }
        self.score = calculate_score(&self.dice);
    }
}
