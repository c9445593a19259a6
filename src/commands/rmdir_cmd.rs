use crate::commands::utils::{fail, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsResult};
use crate::shell::Session;

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "Usage: rmdir DIRECTORY...\n\nRemove each DIRECTORY if it is empty.\n",
            );
        }
        if ctx.args.is_empty() {
            return fail(ctx.out, "rmdir", "missing operand");
        }

        let mut result = CommandResult::success();
        for path in ctx.args {
            if let Err(e) = rmdir(ctx.session, path) {
                report(ctx.out, "rmdir", path, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn rmdir(session: &mut Session, path: &str) -> FsResult<()> {
    let dir = session.lookup(path)?;
    if !session.fs.is_directory(dir) {
        return Err(FsError::NotADirectory);
    }
    session.fs.remove(dir)
}
