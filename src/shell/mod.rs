//! Shell
//!
//! Line-oriented command interpreter over the in-memory file system:
//! read a line, tokenize, expand one alias, split off any redirection,
//! dispatch to a builtin, then write captured output back into a file.

pub mod alias;
pub mod errors;
pub mod history;
pub mod interpreter;
pub mod line_editor;
pub mod redirection;
pub mod session;
pub mod tokenizer;

pub use alias::AliasTable;
pub use errors::{ShellError, ShellResult};
pub use history::History;
pub use interpreter::Shell;
pub use line_editor::LineEditor;
pub use redirection::{Redirect, RedirectMode};
pub use session::Session;
pub use tokenizer::{tokenize, Token};
