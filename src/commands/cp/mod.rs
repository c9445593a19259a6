// src/commands/cp/mod.rs
use crate::commands::utils::{fail, invalid_option, parse_args, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsResult, NodeId};
use crate::shell::Session;

pub struct CpCommand;

const HELP: &str = "Usage: cp [-r] SOURCE DEST
  or:  cp [-r] SOURCE... DIRECTORY

Copy SOURCE to DEST, or multiple SOURCE(s) into DIRECTORY.

Options:
  -r, -R    copy directories recursively
  --help    display this help and exit";

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }
        let parsed = match parse_args(ctx.args, "rR") {
            Ok(parsed) => parsed,
            Err(flag) => return invalid_option(ctx.out, "cp", flag),
        };
        let (dest, sources) = match parsed.operands.split_last() {
            Some((dest, sources)) if !sources.is_empty() => (*dest, sources),
            _ => return fail(ctx.out, "cp", "missing destination file operand"),
        };

        let recursive = parsed.has('r') || parsed.has('R');
        let dest_dir = ctx
            .session
            .resolve(dest)
            .filter(|&id| ctx.session.fs.is_directory(id));
        if sources.len() > 1 && dest_dir.is_none() {
            report(ctx.out, "cp", dest, &FsError::NotADirectory);
            return CommandResult::failure();
        }

        let mut result = CommandResult::success();
        for source in sources {
            let src = match ctx.session.lookup(source) {
                Ok(src) => src,
                Err(e) => {
                    report(ctx.out, "cp", source, &e);
                    result = CommandResult::failure();
                    continue;
                }
            };
            if ctx.session.fs.is_directory(src) && !recursive {
                ctx.out.write_str(&format!("cp: -r not specified; omitting directory '{}'\n", source));
                result = CommandResult::failure();
                continue;
            }
            if let Err(e) = copy(ctx.session, src, dest, dest_dir) {
                report(ctx.out, "cp", source, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn copy(session: &mut Session, src: NodeId, dest: &str, dest_dir: Option<NodeId>) -> FsResult<()> {
    match dest_dir {
        Some(dir) => {
            let name = session.fs.name(src).to_string();
            session.fs.copy_recursive(src, dir, &name)?;
        }
        None => {
            let (parent, leaf) = session.fs.resolve_parent(session.cwd(), dest)?;
            session.fs.copy_recursive(src, parent, leaf)?;
        }
    }
    Ok(())
}
