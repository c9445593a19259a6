//! Console
//!
//! The display/keyboard pair the shell runs on. A real kernel backs this
//! with a text-mode display driver and a scancode keyboard driver; the host
//! binary backs it with a terminal; tests use `BufferConsole`.

use std::collections::VecDeque;

/// Character-cell display plus blocking keyboard.
pub trait Console {
    /// Block until the next translated key is available. `None` means the
    /// input source is closed and will never produce another character.
    fn read_char(&mut self) -> Option<char>;

    fn write_char(&mut self, c: char);

    fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
        }
    }

    /// Current cursor position as (column, row).
    fn cursor(&self) -> (usize, usize);

    fn set_cursor(&mut self, col: usize, row: usize);

    fn clear_screen(&mut self);

    /// Columns per row
    fn width(&self) -> usize {
        80
    }

    /// True when the device already shows typed characters, so the line
    /// editor must not echo them again.
    fn local_echo(&self) -> bool {
        false
    }
}

/// In-memory console: scripted keyboard input and a character grid that
/// records what was drawn.
#[derive(Debug, Clone)]
pub struct BufferConsole {
    input: VecDeque<char>,
    transcript: String,
    rows: Vec<Vec<char>>,
    col: usize,
    row: usize,
    width: usize,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::with_width(80)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            input: VecDeque::new(),
            transcript: String::new(),
            rows: Vec::new(),
            col: 0,
            row: 0,
            width: width.max(1),
        }
    }

    /// Console whose keyboard will produce `input` and then close.
    pub fn with_input(input: &str) -> Self {
        let mut console = Self::new();
        console.push_input(input);
        console
    }

    pub fn push_input(&mut self, input: &str) {
        self.input.extend(input.chars());
    }

    /// Every character written since creation or the last `take_transcript`.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn take_transcript(&mut self) -> String {
        std::mem::take(&mut self.transcript)
    }

    /// The visible grid, one line per row, trailing blanks removed.
    pub fn screen_text(&self) -> String {
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        lines.join("\n")
    }

    fn put_cell(&mut self, c: char) {
        while self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
        let row = &mut self.rows[self.row];
        while row.len() <= self.col {
            row.push(' ');
        }
        row[self.col] = c;
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for BufferConsole {
    fn read_char(&mut self) -> Option<char> {
        self.input.pop_front()
    }

    fn write_char(&mut self, c: char) {
        self.transcript.push(c);
        if c == '\n' {
            self.col = 0;
            self.row += 1;
            while self.rows.len() < self.row {
                self.rows.push(Vec::new());
            }
            return;
        }
        self.put_cell(c);
        self.col += 1;
        if self.col >= self.width {
            self.col = 0;
            self.row += 1;
        }
    }

    fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    fn set_cursor(&mut self, col: usize, row: usize) {
        self.col = col.min(self.width - 1);
        self.row = row;
    }

    fn clear_screen(&mut self) {
        self.rows.clear();
        self.col = 0;
        self.row = 0;
    }

    fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_then_closed() {
        let mut console = BufferConsole::with_input("ab");
        assert_eq!(console.read_char(), Some('a'));
        assert_eq!(console.read_char(), Some('b'));
        assert_eq!(console.read_char(), None);
    }

    #[test]
    fn test_grid_tracks_cursor() {
        let mut console = BufferConsole::new();
        console.write_str("hi\nthere");
        assert_eq!(console.cursor(), (5, 1));
        assert_eq!(console.screen_text(), "hi\nthere");
        assert_eq!(console.transcript(), "hi\nthere");
    }

    #[test]
    fn test_overwrite_cell() {
        let mut console = BufferConsole::new();
        console.write_str("abc");
        console.set_cursor(1, 0);
        console.write_char(' ');
        assert_eq!(console.screen_text(), "a c");
    }

    #[test]
    fn test_wraps_at_width() {
        let mut console = BufferConsole::with_width(3);
        console.write_str("abcd");
        assert_eq!(console.cursor(), (1, 1));
        assert_eq!(console.screen_text(), "abc\nd");
    }

    #[test]
    fn test_clear_screen() {
        let mut console = BufferConsole::new();
        console.write_str("junk\nmore");
        console.clear_screen();
        assert_eq!(console.cursor(), (0, 0));
        assert_eq!(console.screen_text(), "");
    }
}
