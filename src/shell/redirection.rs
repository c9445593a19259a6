//! Output Redirection
//!
//! Finds the first bare `>` or `>>` in a command line and writes the captured
//! output back into the target file once the command has run.

use crate::fs::{FsError, InMemoryFs, NodeId};

use super::errors::{ShellError, ShellResult};
use super::tokenizer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    Truncate,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub mode: RedirectMode,
    pub target: String,
}

/// Split `tokens` into the command words and an optional redirection.
/// Words after the target are ignored.
pub fn split_redirect(mut tokens: Vec<Token>) -> ShellResult<(Vec<Token>, Option<Redirect>)> {
    let pos = match tokens.iter().position(Token::is_redirect_op) {
        Some(pos) => pos,
        None => return Ok((tokens, None)),
    };
    let mode = if tokens[pos].text == ">>" {
        RedirectMode::Append
    } else {
        RedirectMode::Truncate
    };
    let mut rest = tokens.split_off(pos).into_iter().skip(1);
    let target = rest.next().ok_or(ShellError::MissingRedirectTarget)?;
    let ignored = rest.count();
    if ignored > 0 {
        log::debug!("ignoring {} words after redirect target {:?}", ignored, target.text);
    }
    Ok((
        tokens,
        Some(Redirect {
            mode,
            target: target.text,
        }),
    ))
}

/// Write captured command output into the redirect target, creating the file
/// if it does not exist. One trailing newline is dropped.
pub fn write_back(fs: &mut InMemoryFs, cwd: NodeId, redirect: &Redirect, output: &str) -> ShellResult<()> {
    let data = output.strip_suffix('\n').unwrap_or(output);
    let (parent, leaf) = fs.resolve_parent(cwd, &redirect.target)?;
    let file = match fs.lookup(parent, leaf) {
        Some(existing) if fs.is_directory(existing) => return Err(FsError::NotAFile.into()),
        Some(existing) => existing,
        None => fs.create_file(parent, leaf)?,
    };
    match redirect.mode {
        RedirectMode::Truncate => fs.write(file, data.as_bytes())?,
        RedirectMode::Append => fs.append(file, data.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tokenizer::{tokenize, words};

    fn split(line: &str) -> ShellResult<(Vec<String>, Option<Redirect>)> {
        split_redirect(tokenize(line, 12)).map(|(tokens, redirect)| (words(tokens), redirect))
    }

    #[test]
    fn test_no_redirect() {
        let (words, redirect) = split("echo hi").unwrap();
        assert_eq!(words, vec!["echo", "hi"]);
        assert!(redirect.is_none());
    }

    #[test]
    fn test_truncate_and_append() {
        let (words, redirect) = split("echo hi > out.txt").unwrap();
        assert_eq!(words, vec!["echo", "hi"]);
        assert_eq!(
            redirect,
            Some(Redirect {
                mode: RedirectMode::Truncate,
                target: "out.txt".to_string()
            })
        );
        let (_, redirect) = split("echo hi >> log").unwrap();
        assert_eq!(redirect.map(|r| r.mode), Some(RedirectMode::Append));
    }

    #[test]
    fn test_missing_target() {
        assert_eq!(split("echo hi >"), Err(ShellError::MissingRedirectTarget));
    }

    #[test]
    fn test_quoted_operator_is_an_argument() {
        let (words, redirect) = split(r#"echo ">" x"#).unwrap();
        assert_eq!(words, vec!["echo", ">", "x"]);
        assert!(redirect.is_none());
    }

    #[test]
    fn test_write_back_creates_and_appends() {
        let mut fs = InMemoryFs::new();
        let root = fs.root();
        let trunc = Redirect {
            mode: RedirectMode::Truncate,
            target: "f".to_string(),
        };
        let append = Redirect {
            mode: RedirectMode::Append,
            target: "f".to_string(),
        };
        write_back(&mut fs, root, &trunc, "one\n").unwrap();
        write_back(&mut fs, root, &append, "two\n").unwrap();
        let f = fs.resolve_path(root, "f").unwrap();
        assert_eq!(fs.read_str(f).unwrap(), "onetwo");
    }

    #[test]
    fn test_write_back_missing_parent() {
        let mut fs = InMemoryFs::new();
        let root = fs.root();
        let redirect = Redirect {
            mode: RedirectMode::Truncate,
            target: "nodir/f".to_string(),
        };
        assert_eq!(
            write_back(&mut fs, root, &redirect, "x"),
            Err(ShellError::Fs(FsError::NotFound))
        );
        assert_eq!(fs.nodes_used(), 0);
    }

    #[test]
    fn test_write_back_onto_directory() {
        let mut fs = InMemoryFs::new();
        let root = fs.root();
        fs.create_dir(root, "d").unwrap();
        let redirect = Redirect {
            mode: RedirectMode::Truncate,
            target: "d".to_string(),
        };
        assert_eq!(
            write_back(&mut fs, root, &redirect, "x"),
            Err(ShellError::Fs(FsError::NotAFile))
        );
    }
}
