//! Rule-based password strength checker
//!
//! This library scores a password with a fixed set of heuristics and
//! reports a numeric score, a strength tier and improvement suggestions.
//! It does not model entropy or look passwords up in breach lists.
//!
//! # Features
//!
//! - `async` (default): Enables [`analyze_tx`] to deliver results over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for the analysis types (the password is skipped)
//! - `json`: Enables the JSON renderer
//! - `cli`: Builds the `pwd-strength` binary
//!
//! # Environment Variables
//!
//! Used by the interactive session only, never by the analyzer:
//!
//! - `PWD_STRENGTH_SENTINEL`: word that ends the session (default: `exit`)
//! - `PWD_STRENGTH_FORMAT`: `text` or `json` (default: `text`)
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_check::{analyze, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("P@ssw0rdXq9".to_string().into());
//! let analysis = analyze(&password);
//!
//! assert_eq!(analysis.score().value(), 60);
//! assert_eq!(analysis.tier(), StrengthTier::Medium);
//! for suggestion in analysis.suggestions() {
//!     println!("{suggestion}");
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod input;
mod render;
mod sections;
mod session;
mod types;

// Public API
pub use evaluator::{analyze, analyze_str};
pub use sections::{
    CharacterClasses, MIN_LENGTH, RECOMMENDED_LENGTH, SPECIAL_CHARACTERS,
    STRONG_PASSWORD_MESSAGE, WeakPatterns, calculate_score, classify_characters,
    classify_strength, detect_weak_patterns, generate_suggestions, has_repeating_run,
    has_sequential_run, length_bonus, length_points, password_length,
};
pub use types::{PasswordAnalysis, PasswordScore, StrengthTier};

pub use config::{ConfigError, OutputFormat, SessionConfig};
pub use input::{InputError, InputSource, LineSource, ScriptedSource, validate_input};
pub use render::{Renderer, TextRenderer, strength_bar};
pub use session::{Session, SessionError, SessionSummary};

#[cfg(feature = "json")]
pub use render::JsonRenderer;

#[cfg(feature = "async")]
pub use evaluator::analyze_tx;
