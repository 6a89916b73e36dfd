//! Timed roll task.
//!
//! A roll lasts [`ROLL_DURATION_MS`]. While it runs, non-frozen dice are
//! re-randomized every [`ROLL_FRAME_MS`] for visual churn; when it ends the
//! owner applies one final re-randomization and recomputes the score.
//!
//! The task is a plain value driven by the game's fixed-timestep tick. Dropping
//! it cancels both the frame cadence and the completion, so no frame can land
//! after the roll is over or after a new game replaced it.

use crate::die::FrozenSet;
use crate::types::{ROLL_DURATION_MS, ROLL_FRAME_MS};

/// Result of advancing a roll by some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollProgress {
    /// Cosmetic frames that came due (0 when idle).
    pub frames: u32,
    /// The roll reached its end during this advance.
    pub finished: bool,
}

/// One in-flight roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTask {
    elapsed_ms: u32,
    frozen: FrozenSet,
}

impl RollTask {
    /// Start a roll that keeps the dice in `frozen` untouched.
    pub fn new(frozen: FrozenSet) -> Self {
        Self {
            elapsed_ms: 0,
            frozen,
        }
    }

    pub fn frozen(&self) -> FrozenSet {
        self.frozen
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn remaining_ms(&self) -> u32 {
        ROLL_DURATION_MS.saturating_sub(self.elapsed_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= ROLL_DURATION_MS
    }

    /// Advance by `dt_ms`.
    ///
    /// Frames falling exactly on the end of the roll are not reported; the
    /// completion supersedes them.
    pub fn advance(&mut self, dt_ms: u32) -> RollProgress {
        if self.is_finished() {
            return RollProgress::default();
        }
        let before = self.elapsed_ms;
        let after = before.saturating_add(dt_ms).min(ROLL_DURATION_MS);
        self.elapsed_ms = after;

        let finished = after >= ROLL_DURATION_MS;
        let last = if finished { ROLL_DURATION_MS - 1 } else { after };
        let frames = (last / ROLL_FRAME_MS).saturating_sub(before / ROLL_FRAME_MS);

        RollProgress { frames, finished }
    }
}
