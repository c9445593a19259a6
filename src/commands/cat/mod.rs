// src/commands/cat/mod.rs
use crate::commands::utils::{fail, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "Usage: cat FILE...\n\nPrint the content of each FILE followed by a newline.\n",
            );
        }
        if ctx.args.is_empty() {
            return fail(ctx.out, "cat", "missing file operand");
        }

        let mut result = CommandResult::success();
        for path in ctx.args {
            let file = match ctx.session.resolve(path) {
                Some(file) => file,
                None => {
                    report(ctx.out, "cat", path, &FsError::NotFound);
                    result = CommandResult::failure();
                    continue;
                }
            };
            if !ctx.session.fs.is_file(file) {
                report(ctx.out, "cat", path, &FsError::NotAFile);
                result = CommandResult::failure();
                continue;
            }
            if let Some(content) = ctx.session.fs.read_str(file) {
                ctx.out.write_str(&content);
            }
            ctx.out.write_char('\n');
        }
        result
    }
}
