// src/commands/pwd/mod.rs
use crate::commands::utils::{print_help, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, "Usage: pwd\n\nPrint the absolute path of the working directory.");
        }

        let path = ctx.session.cwd_path();
        ctx.out.write_str(&format!("{}\n", path));
        CommandResult::success()
    }
}
