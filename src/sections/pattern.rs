//! Pattern analysis section - detects sequential and repeating runs.

use secrecy::{ExposeSecret, SecretString};

/// Weak-pattern signals found in a password. Presence only: one run costs
/// the same penalty as many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeakPatterns {
    pub has_sequential: bool,
    pub has_repeating: bool,
}

/// Runs both pattern checks over the password.
pub fn detect_weak_patterns(password: &SecretString) -> WeakPatterns {
    let pwd = password.expose_secret();
    WeakPatterns {
        has_sequential: has_sequential_run(pwd),
        has_repeating: has_repeating_run(pwd),
    }
}

/// Returns `true` if three consecutive characters have ascending codepoints
/// (`abc`, `123`, `#$%`), compared case-insensitively.
///
/// Any characters qualify, punctuation included, and there is no wraparound.
pub fn has_sequential_run(pwd: &str) -> bool {
    let chars: Vec<u32> = pwd.to_lowercase().chars().map(u32::from).collect();
    chars
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1)
}

/// Returns `true` if the same character appears three times in a row.
/// Case-sensitive: `aAa` is not a run.
pub fn has_repeating_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
