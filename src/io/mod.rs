//! Console Collaborators
//!
//! The shell talks to the outside world through two narrow interfaces: a
//! `Console` (keyboard in, character display out) and an `OutputSink` that
//! each builtin writes its text to.

pub mod console;
pub mod sink;

pub use console::{BufferConsole, Console};
pub use sink::{CaptureSink, ConsoleSink, OutputSink};
