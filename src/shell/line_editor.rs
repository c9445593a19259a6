//! Line Editor
//!
//! Reads one line from the console a character at a time, echoing what is
//! typed and handling backspace by stepping the cursor back one cell.

use crate::io::Console;

const BACKSPACE: char = '\x08';
const DELETE: char = '\x7f';

pub struct LineEditor {
    /// Buffer size including the terminator slot; at most `capacity - 1`
    /// characters are kept.
    capacity: usize,
}

impl LineEditor {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Block until a full line is entered. Returns `None` once the console's
    /// input is closed and nothing was typed.
    pub fn read_line(&self, console: &mut dyn Console) -> Option<String> {
        let echo = !console.local_echo();
        let limit = self.capacity.saturating_sub(1);
        let mut line = String::new();
        let mut len = 0usize;

        loop {
            let c = match console.read_char() {
                Some(c) => c,
                None if line.is_empty() => return None,
                None => return Some(line),
            };
            match c {
                '\n' | '\r' => {
                    if echo {
                        console.write_char('\n');
                    }
                    return Some(line);
                }
                BACKSPACE | DELETE => {
                    if line.pop().is_some() {
                        len -= 1;
                        if echo {
                            erase_previous_cell(console);
                        }
                    }
                }
                c if c.is_control() && c != '\t' => {}
                c => {
                    if len < limit {
                        line.push(c);
                        len += 1;
                        if echo {
                            console.write_char(c);
                        }
                    }
                }
            }
        }
    }
}

fn erase_previous_cell(console: &mut dyn Console) {
    let (col, row) = console.cursor();
    let (col, row) = if col > 0 {
        (col - 1, row)
    } else if row > 0 {
        (console.width().saturating_sub(1), row - 1)
    } else {
        return;
    };
    console.set_cursor(col, row);
    console.write_char(' ');
    console.set_cursor(col, row);
}
