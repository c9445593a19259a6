use crate::commands::utils::{print_help, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "clear - clear the terminal screen\n\nUsage: clear\n",
            );
        }

        ctx.out.clear();
        CommandResult::success()
    }
}
