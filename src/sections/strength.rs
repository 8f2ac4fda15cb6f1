//! Strength section - maps a score onto its tier.

use crate::types::{PasswordScore, StrengthTier};

const STRONG_THRESHOLD: u8 = 80;
const MEDIUM_THRESHOLD: u8 = 50;

pub fn classify_strength(score: PasswordScore) -> StrengthTier {
    match score.value() {
        s if s >= STRONG_THRESHOLD => StrengthTier::Strong,
        s if s >= MEDIUM_THRESHOLD => StrengthTier::Medium,
        _ => StrengthTier::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(raw: i64) -> StrengthTier {
        classify_strength(PasswordScore::new(raw))
    }

    #[test]
    fn test_strength_boundaries() {
        assert_eq!(tier(100), StrengthTier::Strong);
        assert_eq!(tier(80), StrengthTier::Strong);
        assert_eq!(tier(79), StrengthTier::Medium);
        assert_eq!(tier(50), StrengthTier::Medium);
        assert_eq!(tier(49), StrengthTier::Weak);
        assert_eq!(tier(0), StrengthTier::Weak);
    }

    #[test]
    fn test_strength_is_monotonic() {
        let rank = |t: StrengthTier| match t {
            StrengthTier::Weak => 0,
            StrengthTier::Medium => 1,
            StrengthTier::Strong => 2,
        };
        for raw in 0..100 {
            assert!(rank(tier(raw)) <= rank(tier(raw + 1)), "score {raw}");
        }
    }
}
