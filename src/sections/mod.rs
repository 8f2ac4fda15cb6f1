//! Password analysis sections
//!
//! Each section covers one step of the analysis. They are pure functions
//! and are combined by [`crate::analyze`].

mod length;
mod pattern;
mod score;
mod strength;
mod suggestions;
mod variety;

pub use length::{MIN_LENGTH, RECOMMENDED_LENGTH, length_bonus, length_points, password_length};
pub use pattern::{WeakPatterns, detect_weak_patterns, has_repeating_run, has_sequential_run};
pub use score::calculate_score;
pub use strength::classify_strength;
pub use suggestions::{STRONG_PASSWORD_MESSAGE, generate_suggestions};
pub use variety::{CharacterClasses, SPECIAL_CHARACTERS, classify_characters};
