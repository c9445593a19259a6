use crate::commands::utils::{print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::shell::ShellError;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "help - display available commands\n\nUsage: help [command]\n",
            );
        }

        if let Some(name) = ctx.args.first() {
            let cmd = match ctx.registry.get(name) {
                Some(cmd) => cmd,
                None => {
                    report(ctx.out, "help", name, &ShellError::CommandNotFound);
                    return CommandResult::failure();
                }
            };
            let help_args = ["--help".to_string()];
            let mut sub = CommandContext {
                args: &help_args,
                session: &mut *ctx.session,
                out: &mut *ctx.out,
                registry: ctx.registry,
            };
            return cmd.execute(&mut sub);
        }

        let mut stdout = String::from("Available commands:\n");
        stdout.push_str(&format!("  {}\n", ctx.registry.names().join(" ")));
        stdout.push_str("\nUse '<command> --help' for details on a specific command.\n");
        ctx.out.write_str(&stdout);
        CommandResult::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::run;
    use crate::shell::Session;

    #[test]
    fn test_help_lists_builtins() {
        let mut session = Session::default();
        let (result, out) = run(&HelpCommand, &mut session, &[]);
        assert_eq!(result.exit_code, 0);
        assert!(out.starts_with("Available commands:\n"));
        for name in ["alias", "cd", "cp", "ls", "mv", "tree"] {
            assert!(out.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_help_for_command() {
        let mut session = Session::default();
        let (result, out) = run(&HelpCommand, &mut session, &["mkdir"]);
        assert_eq!(result.exit_code, 0);
        assert!(out.starts_with("Usage: mkdir"));
    }

    #[test]
    fn test_help_unknown_command() {
        let mut session = Session::default();
        let (result, out) = run(&HelpCommand, &mut session, &["frob"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "help: frob: command not found\n");
    }
}
