//! Optional blueprint formatter.
//!
//! The bumper only calls [`Formatter::format`] after [`Formatter::is_available`]
//! returned true; otherwise it prints [`unavailable_notice`] and moves on.

use crate::error::{Error, Result};
use crate::utils::logger::{LogLevel, Logger};
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait Formatter {
    /// Whether the tool can be run at all.
    fn is_available(&self) -> bool;

    /// Formats `path` in place.
    fn format(&self, path: &Path) -> Result<()>;
}

/// `bpfmt`, the Soong blueprint formatter, looked up on `PATH`.
#[derive(Debug, Clone)]
pub struct Bpfmt {
    program: String,
}

impl Bpfmt {
    pub const PROGRAM: &'static str = "bpfmt";

    pub fn new() -> Self {
        Bpfmt {
            program: Self::PROGRAM.to_string(),
        }
    }

    fn resolve(&self) -> Option<PathBuf> {
        which::which(&self.program).ok()
    }
}

impl Default for Bpfmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for Bpfmt {
    fn is_available(&self) -> bool {
        self.resolve().is_some()
    }

    fn format(&self, path: &Path) -> Result<()> {
        let command = format!("{} -w {}", self.program, path.display());
        Logger::new().log_message(LogLevel::Print, &command);

        let status = Command::new(&self.program)
            .arg("-w")
            .arg(path)
            .status()
            .map_err(|e| Error::io("Failed to run bpfmt on", path, e))?;
        if !status.success() {
            return Err(Error::ExternalCommandFailure { command, status });
        }
        Ok(())
    }
}

/// Advisory printed when a blueprint file is left unformatted.
pub fn unavailable_notice(path: &Path) -> String {
    format!(
        "{} is not available so {} is not being formatted. Try `m {}` first",
        Bpfmt::PROGRAM,
        path.display(),
        Bpfmt::PROGRAM
    )
}
