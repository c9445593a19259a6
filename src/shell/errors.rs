//! Shell Errors

use thiserror::Error;

use crate::fs::FsError;

/// Failures raised by the shell layer itself, plus wrapped file system errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("Alias table full")]
    TableFull,

    #[error("{what} too long")]
    BufferOverflow { what: &'static str },

    #[error("Missing redirection target")]
    MissingRedirectTarget,

    #[error("command not found")]
    CommandNotFound,

    #[error(transparent)]
    Fs(#[from] FsError),
}

pub type ShellResult<T> = Result<T, ShellError>;
