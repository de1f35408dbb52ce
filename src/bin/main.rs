//! Host demo: drives a shell from stdin and prints to stdout.
//!
//! Put the terminal in raw mode first (`stty raw -echo`) to get
//! byte-at-a-time input and working arrow keys.

use std::io::{self, Read, Write};

use tinyshell::commands::DEFAULT_COMMANDS;
use tinyshell::{Shell, Sink};

struct Stdout(io::Stdout);

impl Sink for Stdout {
    fn put_char(&mut self, byte: u8) {
        let _ = self.0.write_all(&[byte]);
        let _ = self.0.flush();
    }

    fn put_str(&mut self, text: &str) {
        let _ = self.0.write_all(text.as_bytes());
        let _ = self.0.flush();
    }
}

fn main() -> io::Result<()> {
    let mut out = Stdout(io::stdout());
    let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
    shell.init(&mut out);

    for byte in io::stdin().lock().bytes() {
        shell.process_char(byte?, &mut out);
    }

    Ok(())
}
