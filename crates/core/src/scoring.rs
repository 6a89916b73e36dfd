//! Score calculation.

use crate::die::Die;

/// Sum of pips over all dice (faces count `1..=6`).
///
/// # Examples
///
/// ```
/// use tui_dice_core::{calculate_score, Die};
///
/// let dice = [Die::new(0, 0), Die::new(1, 5), Die::new(2, 2)];
/// assert_eq!(calculate_score(&dice), 10);
/// ```
pub fn calculate_score(dice: &[Die]) -> u32 {
    dice.iter().map(|d| u32::from(d.pips())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_scores_zero() {
        assert_eq!(calculate_score(&[]), 0);
    }

    #[test]
    fn max_row_scores_thirty_six() {
        let dice: Vec<Die> = (0..6).map(|id| Die::new(id, 5)).collect();
        assert_eq!(calculate_score(&dice), 36);
    }
}
