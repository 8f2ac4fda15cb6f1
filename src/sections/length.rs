//! Length section - character count and the length-based score components.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;
const SHORT_LENGTH: usize = 6;
const MAX_LENGTH_BONUS: i64 = 20;

/// Number of characters (Unicode scalar values) in the password.
pub fn password_length(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Points for reaching the length tiers: 30 at 12+, 20 at 8+, 10 at 6+.
pub fn length_points(length: usize) -> i64 {
    if length >= RECOMMENDED_LENGTH {
        30
    } else if length >= MIN_LENGTH {
        20
    } else if length >= SHORT_LENGTH {
        10
    } else {
        0
    }
}

/// Two points per character past 12, capped at 20.
pub fn length_bonus(length: usize) -> i64 {
    if length <= RECOMMENDED_LENGTH {
        return 0;
    }
    let extra = i64::try_from(length - RECOMMENDED_LENGTH).unwrap_or(i64::MAX);
    extra.saturating_mul(2).min(MAX_LENGTH_BONUS)
}
