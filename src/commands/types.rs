// src/commands/types.rs
use crate::io::OutputSink;
use crate::shell::Session;

use super::registry::CommandRegistry;

/// Status a builtin hands back to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    pub fn failure() -> Self {
        Self { exit_code: -1 }
    }
}

/// Everything a builtin can touch while it runs
pub struct CommandContext<'a> {
    /// Arguments after the command name
    pub args: &'a [String],
    pub session: &'a mut Session,
    pub out: &'a mut dyn OutputSink,
    pub registry: &'a CommandRegistry,
}

/// A shell builtin
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}
