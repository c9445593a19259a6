//! File System Module
//!
//! In-memory virtual file system: a node arena and a content arena holding a
//! tree of directories and files, with path resolution and recursive
//! copy/move/remove on top.

pub mod arena;
pub mod in_memory_fs;
pub mod types;

pub use arena::Node;
pub use in_memory_fs::InMemoryFs;
pub use types::*;
