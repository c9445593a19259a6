use crate::commands::utils::{fail, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct UnaliasCommand;

impl Command for UnaliasCommand {
    fn name(&self) -> &'static str {
        "unalias"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "unalias - remove alias definitions\n\nUsage: unalias [-a] name [name ...]\n\nOptions:\n  -a      remove all alias definitions\n",
            );
        }
        if ctx.args.is_empty() {
            return fail(ctx.out, "unalias", "usage: unalias [-a] name [name ...]");
        }
        if ctx.args.iter().any(|a| a == "-a") {
            ctx.session.aliases.clear();
            return CommandResult::success();
        }

        let mut result = CommandResult::success();
        for name in ctx.args {
            if !ctx.session.aliases.remove(name) {
                report(ctx.out, "unalias", name, &"not found");
                result = CommandResult::failure();
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::run;
    use crate::shell::Session;

    fn make_session() -> Session {
        let mut session = Session::default();
        session.aliases.set("ll", "ls -la").unwrap();
        session.aliases.set("p", "pwd").unwrap();
        session
    }

    #[test]
    fn test_unalias_removes() {
        let mut session = make_session();
        let (result, _) = run(&UnaliasCommand, &mut session, &["ll"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(session.aliases.get("ll"), None);
        assert_eq!(session.aliases.get("p"), Some("pwd"));
    }

    #[test]
    fn test_unalias_all() {
        let mut session = make_session();
        run(&UnaliasCommand, &mut session, &["-a"]);
        assert!(session.aliases.is_empty());
    }

    #[test]
    fn test_unalias_missing() {
        let mut session = make_session();
        let (result, out) = run(&UnaliasCommand, &mut session, &["nope", "p"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "unalias: nope: not found\n");
        assert_eq!(session.aliases.get("p"), None);
    }

    #[test]
    fn test_unalias_no_args() {
        let mut session = make_session();
        let (result, _) = run(&UnaliasCommand, &mut session, &[]);
        assert_eq!(result.exit_code, -1);
    }
}
