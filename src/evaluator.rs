//! Password analyzer - runs every section and assembles the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::sections::{
    calculate_score, classify_characters, classify_strength, detect_weak_patterns,
    generate_suggestions, password_length,
};
use crate::types::PasswordAnalysis;

/// Analyzes a password and returns the complete, immutable result.
///
/// Every input is valid, the empty string included (it scores 0 and is
/// `Weak`). Rejecting empty input is left to the caller.
pub fn analyze(password: &SecretString) -> PasswordAnalysis {
    let length = password_length(password);
    let classes = classify_characters(password);
    let patterns = detect_weak_patterns(password);
    let score = calculate_score(length, classes, patterns);
    let tier = classify_strength(score);
    let suggestions = generate_suggestions(length, classes, patterns);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length,
        score = score.value(),
        tier = %tier,
        suggestions = suggestions.len(),
        "password analyzed"
    );

    PasswordAnalysis {
        password: SecretString::new(password.expose_secret().into()),
        length,
        classes,
        patterns,
        score,
        tier,
        suggestions,
    }
}

/// Convenience wrapper around [`analyze`] for plain string input.
pub fn analyze_str(password: &str) -> PasswordAnalysis {
    analyze(&SecretString::new(password.into()))
}

/// Async version that sends the analysis via channel.
#[cfg(feature = "async")]
pub async fn analyze_tx(password: &SecretString, tx: mpsc::Sender<PasswordAnalysis>) {
    let analysis = analyze(password);

    if tx.send(analysis).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Receiver dropped before the password analysis was delivered");
    }
}
