use std::collections::VecDeque;
use std::io::{BufRead, Write};

use clap::Parser;
use memsh::{BufferConsole, Console, ShellConfig, Shell};

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "An interactive shell over an in-memory file system")]
#[command(version)]
struct Cli {
    /// Execute the script from command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// Working directory to create and enter before the first command
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// TOML file overriding the default capacities
    #[arg(long = "config")]
    config: Option<String>,

    /// Output results as JSON (output, exitCode)
    #[arg(long = "json")]
    json: bool,
}

/// Console over the host terminal. The terminal runs in cooked mode, so it
/// echoes and edits input itself.
struct TerminalConsole {
    pending: VecDeque<char>,
    col: usize,
    row: usize,
}

impl TerminalConsole {
    fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            col: 0,
            row: 0,
        }
    }
}

impl Console for TerminalConsole {
    fn read_char(&mut self) -> Option<char> {
        if self.pending.is_empty() {
            let _ = std::io::stdout().flush();
            let mut line = String::new();
            match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => self.pending.extend(line.chars()),
            }
        }
        self.pending.pop_front()
    }

    fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf));
    }

    fn write_str(&mut self, s: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(s.as_bytes());
        let _ = stdout.flush();
        for c in s.chars() {
            if c == '\n' {
                self.col = 0;
                self.row += 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    fn set_cursor(&mut self, col: usize, row: usize) {
        self.col = col;
        self.row = row;
        print!("\x1B[{};{}H", row + 1, col + 1);
    }

    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[H");
        self.col = 0;
        self.row = 0;
    }

    fn local_echo(&self) -> bool {
        true
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };

    let mut shell = Shell::new(config);

    if let Some(cwd) = &cli.cwd {
        let session = shell.session_mut();
        let root = session.fs.root();
        let entered = session
            .fs
            .mkdir_all(root, cwd)
            .and_then(|dir| session.set_cwd(dir));
        if let Err(e) = entered {
            eprintln!("Error: cannot enter {}: {}", cwd, e);
            std::process::exit(1);
        }
    }

    let script = match cli.script {
        Some(script) => script,
        None => {
            let mut console = TerminalConsole::new();
            shell.run(&mut console);
            println!();
            return;
        }
    };

    let mut console = BufferConsole::new();
    let status = shell.run_script(&script, &mut console);
    let exit_code = if status == 0 { 0 } else { 1 };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "output": console.transcript(),
                "exitCode": status,
            })
        );
    } else {
        print!("{}", console.transcript());
    }

    std::process::exit(exit_code);
}
