use crate::commands::utils::{print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct AliasCommand;

impl Command for AliasCommand {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "alias - define or display aliases\n\nUsage: alias [name=value ...]\n",
            );
        }

        if ctx.args.is_empty() {
            let mut stdout = String::new();
            for (name, value) in ctx.session.aliases.iter() {
                stdout.push_str(&format!("{}=\"{}\"\n", name, value));
            }
            ctx.out.write_str(&stdout);
            return CommandResult::success();
        }

        for arg in ctx.args {
            let (name, value) = match arg.split_once('=') {
                Some((name, value)) if !name.is_empty() => (name, value),
                _ => {
                    report(ctx.out, "alias", arg, &"invalid alias definition");
                    return CommandResult::failure();
                }
            };
            if let Err(e) = ctx.session.aliases.set(name, value) {
                report(ctx.out, "alias", name, &e);
                return CommandResult::failure();
            }
        }
        CommandResult::success()
    }
}
