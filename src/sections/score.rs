//! Score section - combines length, variety and pattern signals into a score.

use super::length::{length_bonus, length_points};
use super::pattern::WeakPatterns;
use super::variety::CharacterClasses;
use crate::types::PasswordScore;

const POINTS_PER_CLASS: i64 = 10;
const SEQUENTIAL_PENALTY: i64 = 15;
const REPEATING_PENALTY: i64 = 10;

/// Computes the bounded score.
///
/// Length tier, then 10 points per character class, then the bonus for
/// length past 12, then the pattern penalties. The running total is clamped
/// to `0..=100` only at the end.
pub fn calculate_score(
    length: usize,
    classes: CharacterClasses,
    patterns: WeakPatterns,
) -> PasswordScore {
    let mut score = length_points(length);

    score += classes.count() as i64 * POINTS_PER_CLASS;

    score += length_bonus(length);

    if patterns.has_sequential {
        score -= SEQUENTIAL_PENALTY;
    }
    if patterns.has_repeating {
        score -= REPEATING_PENALTY;
    }

    PasswordScore::new(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: CharacterClasses = CharacterClasses {
        has_uppercase: true,
        has_lowercase: true,
        has_digit: true,
        has_special: true,
    };

    const NO_PATTERNS: WeakPatterns = WeakPatterns {
        has_sequential: false,
        has_repeating: false,
    };

    #[test]
    fn test_score_empty_input() {
        let score = calculate_score(0, CharacterClasses::default(), NO_PATTERNS);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_score_variety_only() {
        assert_eq!(calculate_score(4, ALL_CLASSES, NO_PATTERNS).value(), 40);
    }

    #[test]
    fn test_score_medium_length_all_classes() {
        assert_eq!(calculate_score(11, ALL_CLASSES, NO_PATTERNS).value(), 60);
    }

    #[test]
    fn test_score_no_bonus_at_exactly_twelve() {
        assert_eq!(calculate_score(12, ALL_CLASSES, NO_PATTERNS).value(), 70);
    }

    #[test]
    fn test_score_length_bonus() {
        assert_eq!(calculate_score(13, ALL_CLASSES, NO_PATTERNS).value(), 72);
        assert_eq!(calculate_score(17, ALL_CLASSES, NO_PATTERNS).value(), 80);
    }

    #[test]
    fn test_score_maximum_reachable() {
        assert_eq!(calculate_score(64, ALL_CLASSES, NO_PATTERNS).value(), 90);
    }

    #[test]
    fn test_score_penalties_are_cumulative() {
        let both = WeakPatterns {
            has_sequential: true,
            has_repeating: true,
        };
        assert_eq!(calculate_score(12, ALL_CLASSES, both).value(), 45);
    }

    #[test]
    fn test_score_sequential_penalty() {
        let sequential = WeakPatterns {
            has_sequential: true,
            has_repeating: false,
        };
        assert_eq!(calculate_score(8, ALL_CLASSES, sequential).value(), 45);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let lowercase = CharacterClasses {
            has_lowercase: true,
            ..CharacterClasses::default()
        };
        let both = WeakPatterns {
            has_sequential: true,
            has_repeating: true,
        };
        assert_eq!(calculate_score(3, lowercase, both).value(), 0);
    }
}
