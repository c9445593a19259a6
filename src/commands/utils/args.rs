// src/commands/utils/args.rs

/// Short flags and operands of a builtin's argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs<'a> {
    pub flags: Vec<char>,
    pub operands: Vec<&'a str>,
}

impl ParsedArgs<'_> {
    pub fn has(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }
}

/// Split `args` into short flags and operands. Flags may be bundled (`-rf`)
/// and appear anywhere; `--` ends flag parsing and a lone `-` is an operand.
/// Returns the first flag not listed in `allowed`.
pub fn parse_args<'a>(args: &'a [String], allowed: &str) -> Result<ParsedArgs<'a>, char> {
    let mut parsed = ParsedArgs::default();
    let mut flags_done = false;

    for arg in args {
        if flags_done || arg == "-" || !arg.starts_with('-') {
            parsed.operands.push(arg);
            continue;
        }
        if arg == "--" {
            flags_done = true;
            continue;
        }
        for flag in arg[1..].chars() {
            if !allowed.contains(flag) {
                return Err(flag);
            }
            if !parsed.flags.contains(&flag) {
                parsed.flags.push(flag);
            }
        }
    }

    Ok(parsed)
}
