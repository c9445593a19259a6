use crate::commands::utils::{print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{InMemoryFs, NodeId};

pub struct TreeCommand;

const HELP: &str = "tree - list contents of directories in a tree-like format

Usage: tree [DIRECTORY]

Entries are printed depth first, indented two spaces per level.
Directories carry a trailing '/'.";

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }

        let path = ctx.args.first().map(String::as_str).unwrap_or("");
        let start = match ctx.session.lookup(path) {
            Ok(start) => start,
            Err(e) => {
                report(ctx.out, "tree", path, &e);
                return CommandResult::failure();
            }
        };

        let mut output = String::new();
        build_tree(&ctx.session.fs, start, 0, &mut output);
        ctx.out.write_str(&output);
        CommandResult::success()
    }
}

fn build_tree(fs: &InMemoryFs, node: NodeId, depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str("  ");
    }
    if node == fs.root() {
        output.push('/');
    } else {
        output.push_str(fs.name(node));
        if fs.is_directory(node) {
            output.push('/');
        }
    }
    output.push('\n');

    for &child in fs.children(node) {
        build_tree(fs, child, depth + 1, output);
    }
}
