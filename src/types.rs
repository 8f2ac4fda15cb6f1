//! Value types produced by the analysis engine.

use std::fmt;

use secrecy::SecretString;

use crate::sections::{CharacterClasses, WeakPatterns, classify_strength};

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Builds a score from a raw running total, clamping it to `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> StrengthTier {
        classify_strength(self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Coarse strength label derived from the score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthTier {
    Strong,
    Medium,
    Weak,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Strong => "Strong",
            StrengthTier::Medium => "Medium",
            StrengthTier::Weak => "Weak",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of analyzing a single password.
///
/// Built once by [`crate::analyze`] and never mutated afterwards; every field
/// is read through an accessor. The password itself stays wrapped in a
/// [`SecretString`] so it is redacted from `Debug` output and skipped when
/// serializing.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PasswordAnalysis {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) password: SecretString,
    pub(crate) length: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) classes: CharacterClasses,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) patterns: WeakPatterns,
    pub(crate) score: PasswordScore,
    pub(crate) tier: StrengthTier,
    pub(crate) suggestions: Vec<String>,
}

impl PasswordAnalysis {
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Number of characters in the analyzed password.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }

    pub fn patterns(&self) -> WeakPatterns {
        self.patterns
    }

    pub fn has_uppercase(&self) -> bool {
        self.classes.has_uppercase
    }

    pub fn has_lowercase(&self) -> bool {
        self.classes.has_lowercase
    }

    pub fn has_digit(&self) -> bool {
        self.classes.has_digit
    }

    pub fn has_special(&self) -> bool {
        self.classes.has_special
    }

    pub fn has_sequential(&self) -> bool {
        self.patterns.has_sequential
    }

    pub fn has_repeating(&self) -> bool {
        self.patterns.has_repeating
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }

    /// Improvement suggestions in priority order. Never empty.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}
