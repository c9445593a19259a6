//! Output Sinks
//!
//! Builtins write through an `OutputSink`. The shell hands them either a
//! `ConsoleSink`, which forwards straight to the display, or a `CaptureSink`
//! when the line carries a `>`/`>>` redirection.

use super::console::Console;

/// Destination for a builtin's text output.
pub trait OutputSink {
    fn write_char(&mut self, c: char);

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }

    /// Clear the display. Sinks without a display ignore it.
    fn clear(&mut self) {}
}

impl OutputSink for String {
    fn write_char(&mut self, c: char) {
        self.push(c);
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

/// Pass-through to the console.
pub struct ConsoleSink<'a> {
    console: &'a mut dyn Console,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self { console }
    }
}

impl OutputSink for ConsoleSink<'_> {
    fn write_char(&mut self, c: char) {
        self.console.write_char(c);
    }

    fn write_str(&mut self, s: &str) {
        self.console.write_str(s);
    }

    fn clear(&mut self) {
        self.console.clear_screen();
        self.console.set_cursor(0, 0);
    }
}

/// Fixed-capacity capture buffer. Characters that do not fit are dropped
/// and the overflow is remembered.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    buffer: String,
    capacity: usize,
    overflowed: bool,
}

impl CaptureSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: String::new(),
            capacity,
            overflowed: false,
        }
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl OutputSink for CaptureSink {
    fn write_char(&mut self, c: char) {
        if self.buffer.len() + c.len_utf8() > self.capacity {
            self.overflowed = true;
            return;
        }
        self.buffer.push(c);
    }
}
