// src/commands/echo/mod.rs
use crate::commands::utils::print_help;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

const HELP: &str = "Usage: echo [-n] [STRING]...

Write the STRINGs separated by single spaces, followed by a newline.

Options:
  -n        do not output the trailing newline
  --help    display this help and exit";

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        // Any other `--help` is just a word to print.
        if matches!(ctx.args, [only] if only == "--help") {
            return print_help(ctx.out, HELP);
        }

        let mut no_newline = false;
        let mut start = 0;
        while start < ctx.args.len() && ctx.args[start] == "-n" {
            no_newline = true;
            start += 1;
        }

        let mut output = ctx.args[start..].join(" ");
        if !no_newline {
            output.push('\n');
        }
        ctx.out.write_str(&output);
        CommandResult::success()
    }
}
