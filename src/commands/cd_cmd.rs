use crate::commands::utils::{print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "cd - change the working directory\n\nUsage: cd [DIRECTORY]\n\nWith no DIRECTORY, return to /.\n",
            );
        }

        let target = match ctx.args.first() {
            Some(path) => path.as_str(),
            None => "/",
        };
        let dir = match ctx.session.resolve(target) {
            Some(dir) => dir,
            None => {
                report(ctx.out, "cd", target, &FsError::NotFound);
                return CommandResult::failure();
            }
        };
        match ctx.session.set_cwd(dir) {
            Ok(()) => CommandResult::success(),
            Err(e) => {
                report(ctx.out, "cd", target, &e);
                CommandResult::failure()
            }
        }
    }
}
