// src/commands/ls/mod.rs
use crate::commands::utils::{print_help, report, wants_help};
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{DirentEntry, FsError, FsResult};
use crate::shell::Session;

pub struct LsCommand;

const HELP: &str = "Usage: ls [OPTION]... [DIRECTORY]...

List the entries of each DIRECTORY (the working directory by default).
Directories are shown with a trailing '/'. Options are accepted and ignored.";

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if wants_help(ctx.args) {
            return print_help(ctx.out, HELP);
        }

        let paths: Vec<&str> = ctx
            .args
            .iter()
            .filter(|a| !a.starts_with('-') || a.as_str() == "-")
            .map(String::as_str)
            .collect();

        if paths.is_empty() {
            return match list(ctx.session, "") {
                Ok(entries) => {
                    ctx.out.write_str(&format_entries(&entries));
                    CommandResult::success()
                }
                Err(e) => {
                    report(ctx.out, "ls", ".", &e);
                    CommandResult::failure()
                }
            };
        }

        let mut result = CommandResult::success();
        let show_headers = paths.len() > 1;
        for (i, path) in paths.iter().enumerate() {
            match list(ctx.session, path) {
                Ok(entries) => {
                    if show_headers {
                        if i > 0 {
                            ctx.out.write_char('\n');
                        }
                        ctx.out.write_str(&format!("{}:\n", path));
                    }
                    ctx.out.write_str(&format_entries(&entries));
                }
                Err(e) => {
                    report(ctx.out, "ls", path, &e);
                    result = CommandResult::failure();
                }
            }
        }
        result
    }
}

fn list(session: &Session, path: &str) -> FsResult<Vec<DirentEntry>> {
    let dir = session.lookup(path)?;
    if !session.fs.is_directory(dir) {
        return Err(FsError::NotADirectory);
    }
    session.fs.readdir(dir)
}

fn format_entries(entries: &[DirentEntry]) -> String {
    let names: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.is_directory {
                format!("{}/", e.name)
            } else {
                e.name.clone()
            }
        })
        .collect();
    format!("{}\n", names.join(" "))
}
