// src/commands/rm/mod.rs
use crate::commands::utils::{fail, invalid_option, parse_args, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsResult};
use crate::shell::Session;

pub struct RmCommand;

const HELP: &str = "Usage: rm [-r] FILE...

Remove each FILE. Directories are only removed with -r.

Options:
  -r, -R    remove directories and their contents recursively
  --help    display this help and exit";

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }
        let parsed = match parse_args(ctx.args, "rR") {
            Ok(parsed) => parsed,
            Err(flag) => return invalid_option(ctx.out, "rm", flag),
        };
        if parsed.operands.is_empty() {
            return fail(ctx.out, "rm", "missing operand");
        }

        let recursive = parsed.has('r') || parsed.has('R');
        let mut result = CommandResult::success();
        for path in &parsed.operands {
            if let Err(e) = rm(ctx.session, path, recursive) {
                report(ctx.out, "rm", path, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn rm(session: &mut Session, path: &str, recursive: bool) -> FsResult<()> {
    let node = session.lookup(path)?;
    if recursive {
        session.fs.remove_recursive(node)
    } else if session.fs.is_directory(node) {
        Err(FsError::NotAFile)
    } else {
        session.fs.remove(node)
    }
}
