//! File System Types
//!
//! Handles, node kinds, limits and errors for the in-memory file system.

use std::fmt;

use thiserror::Error;

use crate::config::ShellConfig;

/// Which arena ran out of room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Node,
    Content,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Node => write!(f, "node"),
            Pool::Content => write!(f, "content"),
        }
    }
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Invalid parent directory")]
    InvalidParent,

    #[error("No space left in {pool} pool")]
    ArenaExhausted { pool: Pool },

    #[error("Directory full")]
    DirFull,

    #[error("No such file or directory")]
    NotFound,

    #[error("Not a directory")]
    NotADirectory,

    #[error("Is a directory")]
    NotAFile,

    #[error("Directory not empty")]
    NotEmpty,

    #[error("Cannot move or copy a directory into itself")]
    CycleRejected,

    #[error("Operation not permitted on root")]
    RootProtected,

    #[error("File exists")]
    AlreadyExists,

    #[error("Invalid name")]
    InvalidName,
}

pub type FsResult<T> = Result<T, FsError>;

/// Stable handle to a node slot. Slots are never reused, so a handle stays
/// valid (though possibly detached) for the life of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A run of bytes inside the content arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRef {
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl ContentRef {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Capacities the file system enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsLimits {
    pub max_nodes: usize,
    pub content_pool_size: usize,
    pub max_children: usize,
    pub max_name_len: usize,
}

impl Default for FsLimits {
    fn default() -> Self {
        Self::from(&ShellConfig::default())
    }
}

impl From<&ShellConfig> for FsLimits {
    fn from(config: &ShellConfig) -> Self {
        Self {
            max_nodes: config.max_nodes,
            content_pool_size: config.content_pool_size,
            max_children: config.max_children,
            max_name_len: config.max_name_len,
        }
    }
}

/// Truncate a name to at most `max` characters, on a char boundary.
pub fn truncate_name(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Split a path at its last `/` into (parent path, leaf name).
///
/// `"a/b/c"` → `("a/b", "c")`, `"/c"` → `("/", "c")`, `"c"` → `("", "c")`.
/// Trailing slashes are ignored so `"a/b/"` → `("a", "b")`.
pub fn split_parent_path(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { ("/", "") } else { ("", "") };
    }
    match trimmed.rfind('/') {
        Some(0) => ("/", &trimmed[1..]),
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => ("", trimmed),
    }
}
