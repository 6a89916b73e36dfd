use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::options::{GameOptions, MaxRolls};
use crate::types::{DieId, Face, MAX_DICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DieSnapshot {
    pub id: DieId,
    pub value: Face,
    pub frozen: bool,
    pub dragging: bool,
    pub drag_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub game_id: u32,
    pub seed: u64,
    pub dice: ArrayVec<DieSnapshot, MAX_DICE>,
    pub current_roll: u32,
    pub max_rolls: MaxRolls,
    pub score: u32,
    pub rolling: bool,
    pub roll_elapsed_ms: u32,
    pub options: GameOptions,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.game_id = 0;
        self.seed = 0;
        self.dice.clear();
        self.current_roll = 0;
        self.max_rolls = MaxRolls::Unbounded;
        self.score = 0;
        self.rolling = false;
        self.roll_elapsed_ms = 0;
    }

    /// Whether the roll control is enabled.
    pub fn can_roll(&self) -> bool {
        !self.rolling && self.max_rolls.allows(self.current_roll)
    }

    /// Whether clicking a die would freeze it.
    pub fn can_freeze(&self) -> bool {
        !self.rolling && self.current_roll > 0
    }

    pub fn is_dragging(&self) -> bool {
        self.dice.iter().any(|d| d.dragging)
    }

    /// Hash of everything visible, for skipping redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            game_id: 0,
            seed: 0,
            dice: ArrayVec::new(),
            current_roll: 0,
            max_rolls: MaxRolls::Unbounded,
            score: 0,
            rolling: false,
            roll_elapsed_ms: 0,
            options: GameOptions::default(),
        }
    }
}
