//! Scoring module - cascade scoring rules
//!
//! Every cleared cell is worth `CELL_SCORE` points times the cascade
//! multiplier. The multiplier starts at 1 for each resolution and doubles
//! after every round, so round k contributes `cleared_k * 100 * 2^(k-1)`.

use prism_match_types::CELL_SCORE;

/// Points gained by clearing `cleared` cells at the given multiplier
pub fn round_gain(cleared: u32, multiplier: u32) -> u32 {
    cleared
        .saturating_mul(CELL_SCORE)
        .saturating_mul(multiplier)
}

/// Multiplier for the round after one at `multiplier`
pub fn next_multiplier(multiplier: u32) -> u32 {
    multiplier.saturating_mul(2)
}

/// Multiplier in effect for a 1-based round number
pub fn multiplier_for_round(round: u32) -> u32 {
    if round == 0 {
        return 1;
    }
    1u32.checked_shl(round - 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_gain() {
        assert_eq!(round_gain(3, 1), 300);
        assert_eq!(round_gain(8, 1), 800);
        assert_eq!(round_gain(3, 2), 600);
        assert_eq!(round_gain(5, 4), 2000);
        assert_eq!(round_gain(0, 8), 0);
    }

    #[test]
    fn test_multiplier_doubles() {
        let mut m = 1;
        for expected in [1u32, 2, 4, 8, 16] {
            assert_eq!(m, expected);
            m = next_multiplier(m);
        }
    }

    #[test]
    fn test_multiplier_for_round() {
        assert_eq!(multiplier_for_round(1), 1);
        assert_eq!(multiplier_for_round(2), 2);
        assert_eq!(multiplier_for_round(3), 4);
        assert_eq!(multiplier_for_round(4), 8);
        // Deep cascades saturate instead of wrapping.
        assert_eq!(multiplier_for_round(40), u32::MAX);
    }

    #[test]
    fn test_gain_saturates() {
        assert_eq!(round_gain(u32::MAX, u32::MAX), u32::MAX);
    }
}
