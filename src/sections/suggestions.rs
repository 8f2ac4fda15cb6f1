//! Suggestion section - turns failed checks into improvement advice.

use super::length::{MIN_LENGTH, RECOMMENDED_LENGTH};
use super::pattern::WeakPatterns;
use super::variety::CharacterClasses;

pub const STRONG_PASSWORD_MESSAGE: &str = "Excellent! Your password is strong.";

/// Builds the suggestion list in its fixed priority order: length, missing
/// classes (upper, lower, digit, special), then patterns (sequential,
/// repeating). Falls back to a single affirmative message so the list is
/// never empty.
pub fn generate_suggestions(
    length: usize,
    classes: CharacterClasses,
    patterns: WeakPatterns,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if length < MIN_LENGTH {
        suggestions.push(format!(
            "Increase length to at least {} characters (currently: {})",
            MIN_LENGTH, length
        ));
    } else if length < RECOMMENDED_LENGTH {
        suggestions.push(format!(
            "Consider using {}+ characters for better security",
            RECOMMENDED_LENGTH
        ));
    }

    let checks = [
        (!classes.has_uppercase, "Add uppercase letters (A-Z)"),
        (!classes.has_lowercase, "Add lowercase letters (a-z)"),
        (!classes.has_digit, "Add numbers (0-9)"),
        (!classes.has_special, "Add special characters (!@#$%^&*...)"),
        (
            patterns.has_sequential,
            "Avoid sequential characters (abc, 123, etc.)",
        ),
        (
            patterns.has_repeating,
            "Avoid repeating characters (aaa, 111, etc.)",
        ),
    ];
    suggestions.extend(
        checks
            .into_iter()
            .filter(|(failed, _)| *failed)
            .map(|(_, advice)| advice.to_string()),
    );

    if suggestions.is_empty() {
        suggestions.push(STRONG_PASSWORD_MESSAGE.to_string());
    }
    suggestions
}
