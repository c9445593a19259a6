use crate::commands::utils::{fail, print_help, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "history - display command history\n\nUsage: history [n]\n\nOptions:\n  -c      clear the history list\n",
            );
        }

        let history = &mut ctx.session.history;
        let count = match ctx.args.first().map(String::as_str) {
            Some("-c") => {
                history.clear();
                return CommandResult::success();
            }
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) => n.min(history.len()),
                Err(_) => {
                    return fail(ctx.out, "history", &format!("{}: numeric argument required", arg))
                }
            },
            None => history.len(),
        };

        let start = history.len() - count;
        let mut stdout = String::new();
        for (i, line) in history.numbered().skip(start) {
            stdout.push_str(&format!("{:5}  {}\n", i, line));
        }
        ctx.out.write_str(&stdout);
        CommandResult::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::run;
    use crate::shell::Session;

    fn make_session(lines: &[&str]) -> Session {
        let mut session = Session::default();
        for line in lines {
            session.history.push(line);
        }
        session
    }

    #[test]
    fn test_history_lists_numbered() {
        let mut session = make_session(&["ls", "pwd"]);
        let (result, out) = run(&HistoryCommand, &mut session, &[]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(out, "    1  ls\n    2  pwd\n");
    }

    #[test]
    fn test_history_last_n() {
        let mut session = make_session(&["a", "b", "c"]);
        let (_, out) = run(&HistoryCommand, &mut session, &["2"]);
        assert_eq!(out, "    2  b\n    3  c\n");
        let (_, out) = run(&HistoryCommand, &mut session, &["10"]);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_history_clear() {
        let mut session = make_session(&["a"]);
        run(&HistoryCommand, &mut session, &["-c"]);
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_history_bad_count() {
        let mut session = make_session(&["a"]);
        let (result, out) = run(&HistoryCommand, &mut session, &["x"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "history: x: numeric argument required\n");
    }
}
