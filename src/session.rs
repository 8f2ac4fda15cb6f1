//! Interactive session loop
//!
//! Reads passwords from an [`InputSource`] until the sentinel word or the
//! end of input, analyzes each one and hands the result to a [`Renderer`].

use std::io::{self, Write};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::evaluator::analyze_str;
use crate::input::{InputSource, validate_input};
use crate::render::Renderer;

const BANNER: &str = "\
╔════════════════════════════════════════╗
║   PASSWORD STRENGTH CHECKER            ║
╚════════════════════════════════════════╝
";
const FAREWELL: &str = "Thank you for using Password Strength Checker!";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to render analysis: {0}")]
    Render(String),
}

/// What happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub analyzed: usize,
    pub rejected: usize,
    /// `true` if the sentinel ended the session, `false` on end of input.
    pub stopped_by_sentinel: bool,
}

pub struct Session {
    config: SessionConfig,
    renderer: Box<dyn Renderer>,
}

impl Session {
    pub fn new(config: SessionConfig, renderer: Box<dyn Renderer>) -> Self {
        Self { config, renderer }
    }

    /// Runs the loop until the sentinel or end of input.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<SessionSummary, SessionError>
    where
        S: InputSource + ?Sized,
        W: Write,
    {
        let mut summary = SessionSummary::default();

        #[cfg(feature = "tracing")]
        tracing::info!("session started");

        if self.config.interactive {
            writeln!(out, "{BANNER}")?;
        }

        loop {
            if self.config.interactive {
                write!(
                    out,
                    "Enter password to check (or '{}' to quit): ",
                    self.config.sentinel
                )?;
                out.flush()?;
            }

            let Some(password) = source.next_password()? else {
                break;
            };

            if self.config.is_sentinel(&password) {
                summary.stopped_by_sentinel = true;
                if self.config.interactive {
                    writeln!(out, "\n{FAREWELL}")?;
                }
                break;
            }

            if !self.config.allow_empty {
                if let Err(err) = validate_input(&password) {
                    summary.rejected += 1;
                    #[cfg(feature = "tracing")]
                    tracing::debug!("input rejected: {}", err);
                    if self.config.interactive {
                        writeln!(out, "❌ {err}\n")?;
                    }
                    continue;
                }
            }

            let analysis = analyze_str(&password);
            self.renderer.render(&analysis, out)?;
            if self.config.interactive {
                writeln!(out)?;
            }
            summary.analyzed += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            analyzed = summary.analyzed,
            rejected = summary.rejected,
            "session finished"
        );

        Ok(summary)
    }
}
