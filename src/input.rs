//! Input sources for the session loop.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Password cannot be empty!")]
    Empty,
}

/// Supplies one password per call; `Ok(None)` means the input is exhausted.
pub trait InputSource {
    fn next_password(&mut self) -> io::Result<Option<String>>;
}

/// Reads one password per line from any buffered reader.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl LineSource<BufReader<File>> {
    /// Opens a file holding one password per line.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;

        #[cfg(feature = "tracing")]
        tracing::info!("Reading passwords from {:?}", path.as_ref());

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_password(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// In-memory queue of passwords.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedSource {
    fn next_password(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Caller-side guard run before analysis. The analyzer itself accepts
/// empty input.
pub fn validate_input(password: &str) -> Result<(), InputError> {
    if password.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(())
}
