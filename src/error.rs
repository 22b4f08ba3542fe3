//! Error types for kconfig-bump

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using kconfig-bump's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Required environment variable is not set
    #[error("Environment variable {var} is not set. Run `source build/envsetup.sh && lunch` first")]
    MissingEnvironment { var: String },

    /// Current release directory could not be listed
    #[error("Release directory not found: {path}")]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Current release directory vanished before the copy
    #[error("Source release directory does not exist: {path}")]
    SourceMissing { path: PathBuf },

    /// New release directory is already present
    #[error("Destination release directory already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// External tool exited with a failure status
    #[error("Command `{command}` failed: exit={status}")]
    ExternalCommandFailure { command: String, status: ExitStatus },

    /// Recursive copy failed part way through
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },

    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
