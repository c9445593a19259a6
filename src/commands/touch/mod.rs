// src/commands/touch/mod.rs
use crate::commands::utils::{fail, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsResult};
use crate::shell::Session;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(
                ctx.out,
                "Usage: touch FILE...\n\nCreate each FILE that does not already exist.\n",
            );
        }
        if ctx.args.is_empty() {
            return fail(ctx.out, "touch", "missing file operand");
        }

        let mut result = CommandResult::success();
        for path in ctx.args {
            if let Err(e) = touch(ctx.session, path) {
                report(ctx.out, "touch", path, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn touch(session: &mut Session, path: &str) -> FsResult<()> {
    let (parent, leaf) = session.fs.resolve_parent(session.cwd(), path)?;
    match session.fs.lookup(parent, leaf) {
        Some(existing) if session.fs.is_directory(existing) => Err(FsError::NotAFile),
        Some(_) => Ok(()),
        None => session.fs.create_file(parent, leaf).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::run;

    #[test]
    fn test_touch_creates_files() {
        let mut session = Session::default();
        let (result, out) = run(&TouchCommand, &mut session, &["a", "b"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(out, "");
        assert!(session.fs.is_file(session.resolve("a").unwrap()));
        assert!(session.fs.is_file(session.resolve("b").unwrap()));
    }

    #[test]
    fn test_touch_existing_file_is_untouched() {
        let mut session = Session::default();
        let f = session.fs.create_file(session.fs.root(), "f").unwrap();
        session.fs.write(f, b"keep").unwrap();
        let used = session.fs.nodes_used();
        run(&TouchCommand, &mut session, &["f"]);
        assert_eq!(session.fs.nodes_used(), used);
        assert_eq!(session.fs.read(f), Some(&b"keep"[..]));
    }

    #[test]
    fn test_touch_nested_path() {
        let mut session = Session::default();
        session.fs.mkdir_all(session.fs.root(), "a/b").unwrap();
        run(&TouchCommand, &mut session, &["a/b/file"]);
        assert!(session.resolve("/a/b/file").is_some());
    }

    #[test]
    fn test_touch_errors() {
        let mut session = Session::default();
        session.fs.create_dir(session.fs.root(), "d").unwrap();
        let (result, out) = run(&TouchCommand, &mut session, &["d", "missing/f", "ok"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(
            out,
            "touch: d: Is a directory\ntouch: missing/f: No such file or directory\n"
        );
        assert!(session.resolve("ok").is_some());
    }

    #[test]
    fn test_touch_no_operand() {
        let mut session = Session::default();
        let (result, out) = run(&TouchCommand, &mut session, &[]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "touch: missing file operand\n");
    }
}
