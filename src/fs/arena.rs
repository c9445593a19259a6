//! Arenas
//!
//! Fixed-capacity, append-only pools backing the file system. Neither pool
//! reclaims space: a removed node keeps its slot and rewritten content leaves
//! its old bytes behind. Total lifetime allocation is therefore bounded by the
//! pool sizes regardless of deletions.

use super::types::*;

/// A file or directory slot
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    /// Non-owning back reference; `None` for the root and for detached nodes
    pub parent: Option<NodeId>,
    /// Owned edges, insertion order
    pub children: Vec<NodeId>,
    /// Files only
    pub content: Option<ContentRef>,
}

impl Node {
    fn new(name: &str, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            parent,
            children: Vec::new(),
            content: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// Node pool. Slot 0 is always the root and does not count against capacity.
#[derive(Debug)]
pub struct NodeArena {
    nodes: Vec<Node>,
    capacity: usize,
}

impl NodeArena {
    pub fn new(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::new("/", NodeKind::Directory, None));
        Self { nodes, capacity }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocate a fresh slot.
    pub fn alloc(&mut self, name: &str, kind: NodeKind, parent: Option<NodeId>) -> FsResult<NodeId> {
        if self.used() >= self.capacity {
            log::warn!("node arena exhausted ({} slots)", self.capacity);
            return Err(FsError::ArenaExhausted { pool: Pool::Node });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(name, kind, parent));
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Slots handed out so far, excluding the root
    pub fn used(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// Byte pool for file contents. Every run is followed by a NUL terminator
/// byte, which counts against capacity.
#[derive(Debug)]
pub struct ContentArena {
    bytes: Vec<u8>,
    capacity: usize,
}

impl ContentArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    pub fn used(&self) -> usize {
        self.bytes.len()
    }

    /// Append a new run holding the bytes of `prefix` (an existing run, if
    /// any) followed by `data`.
    pub fn alloc(&mut self, prefix: Option<ContentRef>, data: &[u8]) -> FsResult<ContentRef> {
        let prefix_len = prefix.map_or(0, |run| run.len);
        let len = prefix_len + data.len();
        if len + 1 > self.remaining() {
            log::warn!(
                "content arena exhausted: need {} bytes, {} left",
                len + 1,
                self.remaining()
            );
            return Err(FsError::ArenaExhausted { pool: Pool::Content });
        }
        let offset = self.bytes.len();
        if let Some(run) = prefix {
            self.bytes.extend_from_within(run.offset..run.offset + run.len);
        }
        self.bytes.extend_from_slice(data);
        self.bytes.push(0);
        Ok(ContentRef { offset, len })
    }

    pub fn get(&self, content: ContentRef) -> &[u8] {
        &self.bytes[content.offset..content.offset + content.len]
    }
}
