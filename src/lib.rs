//! memsh - an interactive shell over an in-memory file system
//!
//! The file system lives entirely in two fixed-capacity arenas; the shell
//! reads lines from a character console, tokenizes them, expands aliases,
//! handles `>`/`>>` redirection and dispatches to a small set of builtins.

pub mod commands;
pub mod config;
pub mod fs;
pub mod io;
pub mod shell;

pub use config::{ConfigError, ShellConfig};
pub use fs::{FsError, InMemoryFs, NodeId};
pub use io::{BufferConsole, Console};
pub use shell::{Session, Shell, ShellError};
