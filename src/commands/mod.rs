// src/commands/mod.rs
pub mod alias_cmd;
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod cp;
pub mod echo;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod unalias_cmd;
pub mod utils;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandResult};
