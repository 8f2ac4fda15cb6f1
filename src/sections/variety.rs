//! Character variety section - detects uppercase, lowercase, digit and special characters.

use secrecy::{ExposeSecret, SecretString};

/// Characters that count as "special". Anything outside this set and the
/// ASCII letter/digit ranges (space, tab, `~`, non-ASCII letters...) counts
/// toward no class at all.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Presence of each character class in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterClasses {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterClasses {
    /// Number of classes present, `0..=4`.
    pub fn count(self) -> usize {
        [
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Detects which character classes appear in the password.
pub fn classify_characters(password: &SecretString) -> CharacterClasses {
    let pwd = password.expose_secret();
    CharacterClasses {
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(is_special),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> CharacterClasses {
        classify_characters(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_variety_empty_password() {
        assert_eq!(classify(""), CharacterClasses::default());
    }

    #[test]
    fn test_variety_all_classes() {
        let classes = classify("HasAll123!@#");
        assert!(classes.has_uppercase);
        assert!(classes.has_lowercase);
        assert!(classes.has_digit);
        assert!(classes.has_special);
        assert_eq!(classes.count(), 4);
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let classes = classify("lowercase123!");
        assert!(!classes.has_uppercase);
        assert_eq!(classes.count(), 3);
    }

    #[test]
    fn test_variety_only_digits() {
        let classes = classify("20240101");
        assert_eq!(
            classes,
            CharacterClasses {
                has_digit: true,
                ..CharacterClasses::default()
            }
        );
    }

    #[test]
    fn test_variety_every_special_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(classify(&c.to_string()).has_special, "{c:?} should be special");
        }
    }

    #[test]
    fn test_variety_outside_characters_count_toward_nothing() {
        for s in [" ", "\t", "~", "`", "é", "ÄÖÜ", "日本"] {
            assert_eq!(classify(s), CharacterClasses::default(), "input {s:?}");
        }
    }
}
