// src/commands/mkdir/mod.rs
use crate::commands::utils::{fail, invalid_option, parse_args, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsResult;
use crate::shell::Session;

pub struct MkdirCommand;

const HELP: &str = "Usage: mkdir [-p] DIRECTORY...

Create the DIRECTORY(ies), if they do not already exist.

Options:
  -p        make parent directories as needed
  --help    display this help and exit";

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }
        let parsed = match parse_args(ctx.args, "p") {
            Ok(parsed) => parsed,
            Err(flag) => return invalid_option(ctx.out, "mkdir", flag),
        };
        if parsed.operands.is_empty() {
            return fail(ctx.out, "mkdir", "missing operand");
        }

        let parents = parsed.has('p');
        let mut result = CommandResult::success();
        for dir in &parsed.operands {
            if let Err(e) = mkdir(ctx.session, dir, parents) {
                report(ctx.out, "mkdir", dir, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn mkdir(session: &mut Session, path: &str, parents: bool) -> FsResult<()> {
    let cwd = session.cwd();
    if parents {
        session.fs.mkdir_all(cwd, path)?;
    } else {
        let (parent, leaf) = session.fs.resolve_parent(cwd, path)?;
        session.fs.mkdir(parent, leaf)?;
    }
    Ok(())
}
