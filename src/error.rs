//! Error type shared by the shell's fallible edges.
//!
//! Applying signals never fails. Errors only come from decoding signals off
//! the wire, reading configuration, and attaching to the host page.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid signal at {line}:{column}: {message}")]
    InvalidSignal {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("unknown view {0:?} (expected \"splash\" or \"explore\")")]
    UnknownView(String),

    #[error("mount point {0:?} not found in the host page")]
    MountPointMissing(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
