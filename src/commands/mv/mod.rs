// src/commands/mv/mod.rs
use crate::commands::utils::{fail, print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, FsResult, NodeId};
use crate::shell::Session;

pub struct MvCommand;

const HELP: &str = "Usage: mv SOURCE DEST
  or:  mv SOURCE... DIRECTORY

Rename SOURCE to DEST, or move SOURCE(s) into DIRECTORY.
An existing file DEST is replaced by a file SOURCE.";

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }
        let (dest, sources) = match ctx.args.split_last() {
            Some((dest, sources)) if !sources.is_empty() => (dest.as_str(), sources),
            _ => return fail(ctx.out, "mv", "missing destination file operand"),
        };

        let dest_dir = ctx
            .session
            .resolve(dest)
            .filter(|&id| ctx.session.fs.is_directory(id));
        if sources.len() > 1 && dest_dir.is_none() {
            report(ctx.out, "mv", dest, &FsError::NotADirectory);
            return CommandResult::failure();
        }

        let mut result = CommandResult::success();
        for source in sources {
            let moved = ctx
                .session
                .lookup(source)
                .and_then(|src| move_to(ctx.session, src, dest, dest_dir));
            if let Err(e) = moved {
                report(ctx.out, "mv", source, &e);
                result = CommandResult::failure();
            }
        }
        result
    }
}

fn move_to(session: &mut Session, src: NodeId, dest: &str, dest_dir: Option<NodeId>) -> FsResult<()> {
    match dest_dir {
        Some(dir) => {
            let name = session.fs.name(src).to_string();
            session.fs.move_node(src, dir, &name)
        }
        None => {
            let (parent, leaf) = session.fs.resolve_parent(session.cwd(), dest)?;
            session.fs.move_node(src, parent, leaf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::testing::run;

    fn make_session() -> Session {
        let mut session = Session::default();
        let root = session.fs.root();
        let f = session.fs.create_file(root, "f").unwrap();
        session.fs.write(f, b"data").unwrap();
        let a = session.fs.create_dir(root, "a").unwrap();
        session.fs.create_dir(a, "b").unwrap();
        session.fs.create_dir(root, "dst").unwrap();
        session
    }

    #[test]
    fn test_mv_rename() {
        let mut session = make_session();
        let f = session.resolve("f").unwrap();
        let (result, _) = run(&MvCommand, &mut session, &["f", "g"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(session.resolve("g"), Some(f));
        assert!(session.resolve("f").is_none());
    }

    #[test]
    fn test_mv_into_directory() {
        let mut session = make_session();
        run(&MvCommand, &mut session, &["f", "a", "dst"]);
        assert!(session.resolve("dst/f").is_some());
        assert!(session.resolve("dst/a/b").is_some());
    }

    #[test]
    fn test_mv_into_own_subtree() {
        let mut session = make_session();
        let (result, out) = run(&MvCommand, &mut session, &["a", "a/b"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "mv: a: Cannot move or copy a directory into itself\n");
        assert!(session.resolve("a/b").is_some());
    }

    #[test]
    fn test_mv_root_refused() {
        let mut session = make_session();
        let (result, out) = run(&MvCommand, &mut session, &["/", "dst"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "mv: /: Operation not permitted on root\n");
    }

    #[test]
    fn test_mv_overwrites_file() {
        let mut session = make_session();
        session.fs.create_file(session.fs.root(), "old").unwrap();
        run(&MvCommand, &mut session, &["f", "old"]);
        let old = session.resolve("old").unwrap();
        assert_eq!(session.fs.read(old), Some(&b"data"[..]));
    }

    #[test]
    fn test_mv_directory_onto_file_fails() {
        let mut session = make_session();
        let (result, out) = run(&MvCommand, &mut session, &["a", "f"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "mv: a: File exists\n");
    }

    #[test]
    fn test_mv_missing_source_continues() {
        let mut session = make_session();
        let f = session.resolve("f").unwrap();
        let (result, out) = run(&MvCommand, &mut session, &["missing", "f", "dst"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "mv: missing: No such file or directory\n");
        assert_eq!(session.resolve("dst/f"), Some(f));
        assert!(session.resolve("f").is_none());
    }

    #[test]
    fn test_mv_multiple_sources_need_directory() {
        let mut session = make_session();
        let (result, out) = run(&MvCommand, &mut session, &["f", "a", "missing"]);
        assert_eq!(result.exit_code, -1);
        assert_eq!(out, "mv: missing: Not a directory\n");
    }
}
