//! Shell Interpreter
//!
//! Owns the session and the builtin table and drives the read/eval loop.

use crate::commands::{CommandContext, CommandRegistry};
use crate::config::ShellConfig;
use crate::io::{CaptureSink, Console, ConsoleSink, OutputSink};

use super::errors::ShellError;
use super::line_editor::LineEditor;
use super::redirection::{split_redirect, write_back, Redirect};
use super::session::Session;
use super::tokenizer::{tokenize, words};

const SHELL_NAME: &str = "memsh";

pub struct Shell {
    session: Session,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self::with_session(Session::new(config))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            registry: CommandRegistry::with_builtins(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Prompt, read and execute lines until the console's input closes.
    pub fn run(&mut self, console: &mut dyn Console) {
        let editor = LineEditor::new(self.session.config().line_capacity);
        loop {
            let prompt = self.session.config().prompt.clone();
            console.write_str(&prompt);
            match editor.read_line(console) {
                Some(line) => {
                    self.execute_line(&line, console);
                }
                None => return,
            }
        }
    }

    /// Execute each line of `script` in order and return the last status.
    pub fn run_script(&mut self, script: &str, console: &mut dyn Console) -> i32 {
        let mut status = 0;
        for line in script.lines().filter(|l| !l.trim().is_empty()) {
            status = self.execute_line(line, console);
        }
        status
    }

    /// Run one command line and return its status (0 or -1). Lines longer
    /// than the line buffer are cut short the same way the editor cuts them.
    pub fn execute_line(&mut self, line: &str, console: &mut dyn Console) -> i32 {
        let (max_args, line_capacity) = {
            let config = self.session.config();
            (config.max_args, config.line_capacity)
        };
        let line = clip_line(line, line_capacity);
        if line.trim().is_empty() {
            return 0;
        }
        self.session.history.push(line);

        let tokens = tokenize(line, max_args);
        let tokens = match self.session.aliases.expand(&tokens, line_capacity, max_args) {
            Ok(Some(expanded)) => expanded,
            Ok(None) => tokens,
            Err(e) => {
                let name = tokens.first().map_or(SHELL_NAME, |t| t.text.as_str());
                console.write_str(&format!("{}: {}\n", name, e));
                return -1;
            }
        };
        let (tokens, redirect) = match split_redirect(tokens) {
            Ok(split) => split,
            Err(e) => {
                console.write_str(&format!("{}: {}\n", SHELL_NAME, e));
                return -1;
            }
        };
        let args = words(tokens);

        let status = match redirect {
            None => self.dispatch(&args, &mut ConsoleSink::new(console)),
            Some(redirect) => self.dispatch_captured(&args, &redirect, console),
        };
        self.session.repair_cwd();
        status
    }

    fn dispatch(&mut self, args: &[String], out: &mut dyn OutputSink) -> i32 {
        let name = match args.first() {
            Some(name) => name,
            None => return 0,
        };
        match self.registry.get(name) {
            Some(cmd) => {
                log::debug!("dispatch {} {:?}", name, &args[1..]);
                let mut ctx = CommandContext {
                    args: &args[1..],
                    session: &mut self.session,
                    out,
                    registry: &self.registry,
                };
                cmd.execute(&mut ctx).exit_code
            }
            None => {
                log::debug!("unknown command {}", name);
                out.write_str(&format!("{}: {}\n", name, ShellError::CommandNotFound));
                -1
            }
        }
    }

    fn dispatch_captured(&mut self, args: &[String], redirect: &Redirect, console: &mut dyn Console) -> i32 {
        let mut capture = CaptureSink::new(self.session.config().capture_capacity);
        let status = self.dispatch(args, &mut capture);

        if capture.overflowed() {
            log::warn!("capture buffer full, discarding output for {}", redirect.target);
            let err = ShellError::BufferOverflow {
                what: "Redirected output",
            };
            console.write_str(&format!("{}: {}: {}\n", SHELL_NAME, redirect.target, err));
            return -1;
        }

        let cwd = self.session.cwd();
        match write_back(&mut self.session.fs, cwd, redirect, capture.contents()) {
            Ok(()) => status,
            Err(e) => {
                log::warn!("discarding output for {}: {}", redirect.target, e);
                console.write_str(&format!("{}: {}: {}\n", SHELL_NAME, redirect.target, e));
                -1
            }
        }
    }
}

/// Keep at most `capacity - 1` characters of `line`.
fn clip_line(line: &str, capacity: usize) -> &str {
    let limit = capacity.saturating_sub(1);
    match line.char_indices().nth(limit) {
        Some((idx, _)) => {
            log::warn!("input line longer than {} characters, truncated", limit);
            &line[..idx]
        }
        None => line,
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
