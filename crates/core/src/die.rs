//! Dice and the frozen set.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{DieId, Face, FACE_COUNT, MAX_DICE};

/// One die: a stable identity within the game and its current face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub value: Face,
}

impl Die {
    pub fn new(id: DieId, value: Face) -> Self {
        debug_assert!(value < FACE_COUNT);
        Self { id, value }
    }

    /// Pip count shown on the face (`1..=6`).
    pub fn pips(&self) -> u8 {
        self.value + 1
    }
}

/// Ordered row of dice. Order is what the player sees and rearranges.
pub type Dice = ArrayVec<Die, MAX_DICE>;

/// Set of die ids excluded from re-rolling.
///
/// Ids are always below [`MAX_DICE`], so membership fits in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrozenSet(u8);

impl FrozenSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    fn bit(id: DieId) -> Option<u8> {
        if (id as usize) < MAX_DICE {
            Some(1u8 << id)
        } else {
            None
        }
    }

    pub fn contains(&self, id: DieId) -> bool {
        Self::bit(id).is_some_and(|b| self.0 & b != 0)
    }

    pub fn insert(&mut self, id: DieId) {
        if let Some(b) = Self::bit(id) {
            self.0 |= b;
        }
    }

    pub fn remove(&mut self, id: DieId) {
        if let Some(b) = Self::bit(id) {
            self.0 &= !b;
        }
    }

    /// Flip membership of `id`. Returns whether it is frozen afterwards.
    pub fn toggle(&mut self, id: DieId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.insert(id);
            self.contains(id)
        }
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = DieId> + '_ {
        (0..MAX_DICE as DieId).filter(move |&id| self.contains(id))
    }
}
