//! In-Memory File System Implementation
//!
//! A tree of directories and files built on the two arenas. Parent links are
//! non-owning back references used for `..`, path printing and the
//! ancestor-cycle guard; the owning edge is the parent's `children` list.
//!
//! Lookups scan children in insertion order and the first exact match wins.
//! `create_file`/`create_dir` do not reject duplicate names, so callers that
//! care about uniqueness look the name up first.

use std::borrow::Cow;

use super::arena::{ContentArena, Node, NodeArena};
use super::types::*;

/// In-memory virtual file system.
#[derive(Debug)]
pub struct InMemoryFs {
    nodes: NodeArena,
    content: ContentArena,
    limits: FsLimits,
}

impl InMemoryFs {
    /// Create a file system holding only the root directory.
    pub fn new() -> Self {
        Self::with_limits(FsLimits::default())
    }

    pub fn with_limits(limits: FsLimits) -> Self {
        Self {
            nodes: NodeArena::new(limits.max_nodes),
            content: ContentArena::new(limits.content_pool_size),
            limits,
        }
    }

    pub fn root(&self) -> NodeId {
        self.nodes.root()
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.nodes.get(id).map_or("", |n| n.name.as_str())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.nodes.get(id).map(|n| n.kind)
    }

    pub fn is_directory(&self, id: NodeId) -> bool {
        self.nodes.get(id).map_or(false, Node::is_directory)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.nodes.get(id).map_or(false, Node::is_file)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Node slots consumed so far (root excluded)
    pub fn nodes_used(&self) -> usize {
        self.nodes.used()
    }

    pub fn content_remaining(&self) -> usize {
        self.content.remaining()
    }

    /// Immediate children of a directory with type information
    pub fn readdir(&self, dir: NodeId) -> FsResult<Vec<DirentEntry>> {
        let node = self.nodes.get(dir).ok_or(FsError::NotFound)?;
        if !node.is_directory() {
            return Err(FsError::NotADirectory);
        }
        Ok(node
            .children
            .iter()
            .filter_map(|&id| {
                self.nodes.get(id).map(|child| DirentEntry {
                    name: child.name.clone(),
                    is_directory: child.is_directory(),
                })
            })
            .collect())
    }

    // ========================================================================
    // Creation
    // ========================================================================

    pub fn create_file(&mut self, parent: NodeId, name: &str) -> FsResult<NodeId> {
        self.create(parent, name, NodeKind::File)
    }

    pub fn create_dir(&mut self, parent: NodeId, name: &str) -> FsResult<NodeId> {
        self.create(parent, name, NodeKind::Directory)
    }

    fn create(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> FsResult<NodeId> {
        let dir = self
            .nodes
            .get(parent)
            .filter(|n| n.is_directory())
            .ok_or(FsError::InvalidParent)?;
        // Checked before allocating so a full directory does not burn a slot.
        if dir.children.len() >= self.limits.max_children {
            return Err(FsError::DirFull);
        }
        let name = truncate_name(name, self.limits.max_name_len);
        let id = self.nodes.alloc(name, kind, Some(parent))?;
        if let Some(dir) = self.nodes.get_mut(parent) {
            dir.children.push(id);
        }
        Ok(id)
    }

    /// Return the directory `name` under `parent`, creating it if absent.
    pub fn mkdir(&mut self, parent: NodeId, name: &str) -> FsResult<NodeId> {
        match self.lookup(parent, name) {
            Some(existing) if self.is_directory(existing) => Ok(existing),
            Some(_) => Err(FsError::AlreadyExists),
            None => self.create_dir(parent, name),
        }
    }

    /// Create every missing directory along `path`, starting at `base` (or
    /// the root for absolute paths).
    pub fn mkdir_all(&mut self, base: NodeId, path: &str) -> FsResult<NodeId> {
        let mut node = if path.starts_with('/') { self.root() } else { base };
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = match segment {
                "." => node,
                ".." => self.parent(node).unwrap_or(node),
                name => self.mkdir(node, name)?,
            };
        }
        Ok(node)
    }

    // ========================================================================
    // Lookup and resolution
    // ========================================================================

    /// First child of `parent` named exactly `name`.
    pub fn lookup(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        let dir = self.nodes.get(parent).filter(|n| n.is_directory())?;
        let name = truncate_name(name, self.limits.max_name_len);
        dir.children
            .iter()
            .copied()
            .find(|&child| self.name(child) == name)
    }

    /// Resolve `path` relative to `base`; absolute paths start at the root.
    pub fn resolve_path(&self, base: NodeId, path: &str) -> Option<NodeId> {
        self.nodes.get(base)?;
        if path.is_empty() {
            return Some(base);
        }
        let mut node = if path.starts_with('/') { self.root() } else { base };
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = match segment {
                "." => node,
                ".." => self.parent(node).unwrap_or(node),
                name => self.lookup(node, name)?,
            };
        }
        Some(node)
    }

    /// Resolve everything before the last `/` of `path` to a directory and
    /// return it with the leaf name.
    pub fn resolve_parent<'p>(&self, base: NodeId, path: &'p str) -> FsResult<(NodeId, &'p str)> {
        let (dir_path, leaf) = split_parent_path(path);
        if leaf.is_empty() || leaf == "." || leaf == ".." {
            return Err(FsError::InvalidName);
        }
        let parent = self.resolve_path(base, dir_path).ok_or(FsError::NotFound)?;
        if !self.is_directory(parent) {
            return Err(FsError::NotADirectory);
        }
        Ok((parent, leaf))
    }

    /// Absolute path of a node, built by walking parent links.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root() {
                break;
            }
            parts.push(self.name(node));
            current = self.parent(node);
        }
        if parts.is_empty() {
            return "/".to_string();
        }
        parts.reverse();
        format!("/{}", parts.join("/"))
    }

    /// True when `node` is `ancestor` or lies somewhere beneath it.
    pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        // Bounded walk: a chain can never be longer than the arena.
        let mut steps = self.nodes.used() + 1;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            if steps == 0 {
                break;
            }
            steps -= 1;
            current = self.parent(id);
        }
        false
    }

    /// True when `node` is still reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.is_within(node, self.root())
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Unlink a file or an empty directory. The arena slot is retained.
    pub fn remove(&mut self, node: NodeId) -> FsResult<()> {
        if node == self.root() {
            return Err(FsError::RootProtected);
        }
        let entry = self.nodes.get(node).ok_or(FsError::NotFound)?;
        if entry.is_directory() && !entry.children.is_empty() {
            return Err(FsError::NotEmpty);
        }
        self.detach(node);
        Ok(())
    }

    /// Remove a node and everything beneath it, deepest entries first.
    pub fn remove_recursive(&mut self, node: NodeId) -> FsResult<()> {
        if node == self.root() {
            return Err(FsError::RootProtected);
        }
        self.nodes.get(node).ok_or(FsError::NotFound)?;
        self.remove_subtree(node)
    }

    fn remove_subtree(&mut self, node: NodeId) -> FsResult<()> {
        let children = self.children(node).to_vec();
        for child in children {
            self.remove_subtree(child)?;
        }
        self.remove(node)
    }

    fn detach(&mut self, node: NodeId) {
        let parent = match self.nodes.get_mut(node) {
            Some(entry) => entry.parent.take(),
            None => return,
        };
        if let Some(dir) = parent.and_then(|p| self.nodes.get_mut(p)) {
            dir.children.retain(|&child| child != node);
        }
    }

    // ========================================================================
    // Copy and move
    // ========================================================================

    /// Copy `src` under `dst_parent` as `new_name`. Existing entries of the
    /// same kind are reused; directory children keep their own names.
    /// Copying a node onto itself is a no-op.
    pub fn copy_recursive(&mut self, src: NodeId, dst_parent: NodeId, new_name: &str) -> FsResult<NodeId> {
        let kind = self.kind(src).ok_or(FsError::NotFound)?;
        if !self.is_directory(dst_parent) {
            return Err(FsError::NotADirectory);
        }
        if self.lookup(dst_parent, new_name) == Some(src) {
            log::debug!("copy of {} onto itself skipped", self.path_of(src));
            return Ok(src);
        }
        match kind {
            NodeKind::File => self.copy_file(src, dst_parent, new_name),
            NodeKind::Directory => {
                if self.is_within(dst_parent, src) {
                    return Err(FsError::CycleRejected);
                }
                let target = match self.lookup(dst_parent, new_name) {
                    Some(existing) if self.is_directory(existing) => existing,
                    Some(_) => return Err(FsError::NotADirectory),
                    None => self.create_dir(dst_parent, new_name)?,
                };
                let children = self.children(src).to_vec();
                for child in children {
                    let name = self.name(child).to_string();
                    self.copy_recursive(child, target, &name)?;
                }
                Ok(target)
            }
        }
    }

    fn copy_file(&mut self, src: NodeId, dst_parent: NodeId, new_name: &str) -> FsResult<NodeId> {
        let source = self.nodes.get(src).and_then(|n| n.content);
        if let Some(run) = source {
            if run.len() + 1 > self.content.remaining() {
                return Err(FsError::ArenaExhausted { pool: Pool::Content });
            }
        }
        let target = match self.lookup(dst_parent, new_name) {
            Some(existing) if self.is_directory(existing) => return Err(FsError::NotAFile),
            Some(existing) => existing,
            None => self.create_file(dst_parent, new_name)?,
        };
        let copied = match source {
            Some(run) => Some(self.content.alloc(Some(run), &[])?),
            None => None,
        };
        if let Some(entry) = self.nodes.get_mut(target) {
            entry.content = copied;
        }
        Ok(target)
    }

    /// Relink `node` under `target_parent` as `new_name`. A file may replace
    /// an existing file of the same name; any other collision fails.
    pub fn move_node(&mut self, node: NodeId, target_parent: NodeId, new_name: &str) -> FsResult<()> {
        if node == self.root() {
            return Err(FsError::RootProtected);
        }
        let moving_file = self.is_file(node);
        self.nodes.get(node).ok_or(FsError::NotFound)?;
        if !self.is_directory(target_parent) {
            return Err(FsError::NotADirectory);
        }
        if self.is_within(target_parent, node) {
            return Err(FsError::CycleRejected);
        }

        let new_name = truncate_name(new_name, self.limits.max_name_len).to_string();
        let replaced = match self.lookup(target_parent, &new_name) {
            Some(existing) if existing == node => None,
            Some(existing) if moving_file && self.is_file(existing) => Some(existing),
            Some(_) => return Err(FsError::AlreadyExists),
            None => None,
        };

        let same_parent = self.parent(node) == Some(target_parent);
        if !same_parent {
            let occupied = self.children(target_parent).len() - usize::from(replaced.is_some());
            if occupied >= self.limits.max_children {
                return Err(FsError::DirFull);
            }
        }

        if let Some(existing) = replaced {
            self.detach(existing);
        }
        if !same_parent {
            self.detach(node);
            if let Some(dir) = self.nodes.get_mut(target_parent) {
                dir.children.push(node);
            }
        }
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.name = new_name;
            entry.parent = Some(target_parent);
        }
        Ok(())
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Replace a file's content with a fresh run; the old bytes are abandoned.
    pub fn write(&mut self, file: NodeId, data: &[u8]) -> FsResult<()> {
        self.checked_file(file)?;
        let run = self.content.alloc(None, data)?;
        self.set_content(file, run);
        Ok(())
    }

    /// Copy the existing content plus `data` into a fresh run.
    pub fn append(&mut self, file: NodeId, data: &[u8]) -> FsResult<()> {
        let existing = self.checked_file(file)?.content;
        let run = self.content.alloc(existing, data)?;
        self.set_content(file, run);
        Ok(())
    }

    /// Content bytes, or `None` for directories and never-written files.
    pub fn read(&self, file: NodeId) -> Option<&[u8]> {
        let node = self.nodes.get(file).filter(|n| n.is_file())?;
        node.content.map(|run| self.content.get(run))
    }

    pub fn read_str(&self, file: NodeId) -> Option<Cow<'_, str>> {
        self.read(file).map(String::from_utf8_lossy)
    }

    fn checked_file(&self, file: NodeId) -> FsResult<&Node> {
        let node = self.nodes.get(file).ok_or(FsError::NotFound)?;
        if !node.is_file() {
            return Err(FsError::NotAFile);
        }
        Ok(node)
    }

    fn set_content(&mut self, file: NodeId, run: ContentRef) {
        if let Some(node) = self.nodes.get_mut(file) {
            node.content = Some(run);
        }
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
