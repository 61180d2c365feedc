//! Error type shared by the loader, the configuration layer and the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a rewrite.
///
/// I/O failures are carried through untouched so the binary can print the
/// underlying description.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The source stylesheet is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl RewriteError {
    /// The path the failing operation was working on, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            RewriteError::InputRead { path, .. } | RewriteError::OutputWrite { path, .. } => {
                Some(path)
            }
            RewriteError::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;
