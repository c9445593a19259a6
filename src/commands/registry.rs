// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registry holding every builtin
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::alias_cmd::AliasCommand;
use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::cp::CpCommand;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::unalias_cmd::UnaliasCommand;

/// Register every builtin
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(AliasCommand));
    registry.register(Box::new(UnaliasCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(HelpCommand));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = CommandRegistry::with_builtins();
        for name in [
            "echo", "pwd", "ls", "cd", "touch", "cat", "mkdir", "rmdir", "rm", "cp", "mv",
            "tree", "history", "alias", "unalias", "clear", "help",
        ] {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert!(registry.get("grep").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let registry = CommandRegistry::with_builtins();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
