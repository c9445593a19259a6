// src/commands/utils/mod.rs
//! Helpers shared by the builtins: argument parsing and error reporting.

pub mod args;

pub use args::{parse_args, ParsedArgs};

use std::fmt::Display;

use crate::io::OutputSink;

use super::types::CommandResult;

pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help")
}

/// Print a usage text and succeed.
pub fn print_help(out: &mut dyn OutputSink, text: &str) -> CommandResult {
    out.write_str(text);
    if !text.ends_with('\n') {
        out.write_char('\n');
    }
    CommandResult::success()
}

/// Report a per-target failure as `cmd: target: message`.
pub fn report(out: &mut dyn OutputSink, cmd: &str, target: &str, err: &dyn Display) {
    out.write_str(&format!("{}: {}: {}\n", cmd, target, err));
}

/// Report a failure that is not tied to one target and return -1.
pub fn fail(out: &mut dyn OutputSink, cmd: &str, message: &str) -> CommandResult {
    out.write_str(&format!("{}: {}\n", cmd, message));
    CommandResult::failure()
}

pub fn invalid_option(out: &mut dyn OutputSink, cmd: &str, flag: char) -> CommandResult {
    fail(out, cmd, &format!("invalid option -- '{}'", flag))
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::commands::{Command, CommandContext, CommandRegistry, CommandResult};
    use crate::shell::Session;

    /// Run one builtin against `session`, returning its status and output.
    pub fn run(cmd: &dyn Command, session: &mut Session, args: &[&str]) -> (CommandResult, String) {
        let registry = CommandRegistry::with_builtins();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = String::new();
        let result = {
            let mut ctx = CommandContext {
                args: &args,
                session,
                out: &mut out,
                registry: &registry,
            };
            cmd.execute(&mut ctx)
        };
        (result, out)
    }
}
