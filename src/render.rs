//! Output rendering for analysis results.

use std::io::Write;

use crate::session::SessionError;
use crate::types::{PasswordAnalysis, StrengthTier};

const RULE_WIDTH: usize = 50;
const BAR_CELLS: usize = 20;

pub trait Renderer {
    fn render(&self, analysis: &PasswordAnalysis, out: &mut dyn Write) -> Result<(), SessionError>;
}

/// Human-readable report with a strength bar and numbered suggestions.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

fn tier_marker(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Strong => "🟢",
        StrengthTier::Medium => "🟡",
        StrengthTier::Weak => "🔴",
    }
}

fn length_marker(length: usize) -> &'static str {
    if length >= crate::sections::RECOMMENDED_LENGTH {
        "✓"
    } else if length >= crate::sections::MIN_LENGTH {
        "⚠"
    } else {
        "✗"
    }
}

fn yes_no(present: bool) -> &'static str {
    if present { "✓ Yes" } else { "✗ No" }
}

/// Twenty cells, one filled per 5 points.
pub fn strength_bar(score: u8) -> String {
    let filled = (score as usize / 5).min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

impl Renderer for TextRenderer {
    fn render(&self, analysis: &PasswordAnalysis, out: &mut dyn Write) -> Result<(), SessionError> {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let tier = analysis.tier();

        writeln!(out, "\n{heavy}")?;
        writeln!(out, "PASSWORD ANALYSIS RESULTS")?;
        writeln!(out, "{heavy}")?;
        writeln!(
            out,
            "{} Strength: {} ({})",
            tier_marker(tier),
            tier,
            analysis.score()
        )?;
        writeln!(out, "Strength Bar: [{}]", strength_bar(analysis.score().value()))?;

        writeln!(out, "\n{light}")?;
        writeln!(out, "DETAILS:")?;
        writeln!(out, "{light}")?;
        writeln!(
            out,
            "Length: {} characters {}",
            analysis.length(),
            length_marker(analysis.length())
        )?;
        writeln!(out, "Uppercase letters: {}", yes_no(analysis.has_uppercase()))?;
        writeln!(out, "Lowercase letters: {}", yes_no(analysis.has_lowercase()))?;
        writeln!(out, "Numbers: {}", yes_no(analysis.has_digit()))?;
        writeln!(out, "Special characters: {}", yes_no(analysis.has_special()))?;

        if analysis.has_sequential() || analysis.has_repeating() {
            writeln!(out, "\n⚠️  WARNING FLAGS:")?;
            if analysis.has_sequential() {
                writeln!(out, "  • Contains sequential characters")?;
            }
            if analysis.has_repeating() {
                writeln!(out, "  • Contains repeating characters")?;
            }
        }

        writeln!(out, "\n{light}")?;
        writeln!(out, "SUGGESTIONS FOR IMPROVEMENT:")?;
        writeln!(out, "{light}")?;
        for (i, suggestion) in analysis.suggestions().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, suggestion)?;
        }
        Ok(())
    }
}

/// One JSON object per line. The password itself is never written.
#[cfg(feature = "json")]
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

#[cfg(feature = "json")]
impl Renderer for JsonRenderer {
    fn render(&self, analysis: &PasswordAnalysis, out: &mut dyn Write) -> Result<(), SessionError> {
        let line = serde_json::to_string(analysis)
            .map_err(|e| SessionError::Render(e.to_string()))?;
        writeln!(out, "{line}")?;
        Ok(())
    }
}
