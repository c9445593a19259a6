//! Session
//!
//! All mutable shell state in one place: the file system, the working
//! directory, aliases and history. Commands receive it through their context.

use crate::config::ShellConfig;
use crate::fs::{FsError, FsLimits, FsResult, InMemoryFs, NodeId};

use super::alias::AliasTable;
use super::history::History;

pub struct Session {
    pub fs: InMemoryFs,
    pub aliases: AliasTable,
    pub history: History,
    cwd: NodeId,
    config: ShellConfig,
}

impl Session {
    pub fn new(config: ShellConfig) -> Self {
        let fs = InMemoryFs::with_limits(FsLimits::from(&config));
        let cwd = fs.root();
        Self {
            fs,
            aliases: AliasTable::new(config.alias_capacity),
            history: History::new(config.history_capacity),
            cwd,
            config,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Change the working directory; only directories are accepted.
    pub fn set_cwd(&mut self, dir: NodeId) -> FsResult<()> {
        if !self.fs.is_directory(dir) {
            return Err(FsError::NotADirectory);
        }
        self.cwd = dir;
        Ok(())
    }

    pub fn cwd_path(&self) -> String {
        self.fs.path_of(self.cwd)
    }

    /// Resolve a path against the working directory.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        self.fs.resolve_path(self.cwd, path)
    }

    /// Resolve a path that must exist, mapping absence to `NotFound`.
    pub fn lookup(&self, path: &str) -> FsResult<NodeId> {
        self.resolve(path).ok_or(FsError::NotFound)
    }

    /// Fall back to the root if the working directory was unlinked.
    pub fn repair_cwd(&mut self) {
        if !self.fs.is_attached(self.cwd) {
            log::debug!("working directory detached, returning to /");
            self.cwd = self.fs.root();
        }
    }

    /// Drop every file, alias and history line and return to the root.
    pub fn reset(&mut self) {
        log::info!("session reset");
        *self = Self::new(self.config.clone());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let session = Session::default();
        assert_eq!(session.cwd(), session.fs.root());
        assert_eq!(session.cwd_path(), "/");
    }

    #[test]
    fn test_set_cwd_rejects_files() {
        let mut session = Session::default();
        let root = session.fs.root();
        let file = session.fs.create_file(root, "f").unwrap();
        assert_eq!(session.set_cwd(file), Err(FsError::NotADirectory));
        assert_eq!(session.cwd(), root);
    }

    #[test]
    fn test_repair_cwd_after_removal() {
        let mut session = Session::default();
        let dir = session.fs.mkdir_all(session.fs.root(), "a/b").unwrap();
        session.set_cwd(dir).unwrap();
        let a = session.resolve("/a").unwrap();
        session.fs.remove_recursive(a).unwrap();
        session.repair_cwd();
        assert_eq!(session.cwd_path(), "/");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::default();
        let root = session.fs.root();
        let dir = session.fs.create_dir(root, "d").unwrap();
        session.set_cwd(dir).unwrap();
        session.aliases.set("ll", "ls").unwrap();
        session.history.push("ls");
        session.reset();
        assert_eq!(session.cwd_path(), "/");
        assert!(session.resolve("d").is_none());
        assert!(session.aliases.is_empty());
        assert!(session.history.is_empty());
        assert_eq!(session.fs.nodes_used(), 0);
    }
}
