//! Splitting a submitted line into arguments.
//!
//! Arguments are separated by spaces; runs of spaces never produce empty
//! arguments. The parser does not copy or rewrite the line: every argument
//! is a slice of it, so the arguments live exactly as long as the line.
//!
//! ```text
//! led 1 on          # 3 args: ["led", "1", "on"]
//!   status          # 1 arg:  ["status"]
//! echo a  b         # 3 args: ["echo", "a", "b"]
//! ```

use heapless::Vec;

/// ASCII space, the only argument separator.
pub const ASCII_SPACE: u8 = 0x20;

/// Arguments parsed from one line, at most `MAX` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments<'l, const MAX: usize> {
    argv: Vec<&'l str, MAX>,
    truncated: bool,
}

impl<'l, const MAX: usize> Arguments<'l, MAX> {
    /// Split `line` on spaces.
    ///
    /// Tokens beyond `MAX` are dropped and [`truncated`](Self::truncated)
    /// reports that it happened.
    pub fn parse(line: &'l str) -> Self {
        let mut argv = Vec::new();
        let mut truncated = false;

        for token in line.split(ASCII_SPACE as char).filter(|t| !t.is_empty()) {
            if argv.push(token).is_err() {
                truncated = true;
                break;
            }
        }

        Self { argv, truncated }
    }

    /// Number of arguments, including the command name.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// All arguments. `argv()[0]` is the command name.
    pub fn argv(&self) -> &[&'l str] {
        &self.argv
    }

    /// The command name, if the line had any token at all.
    pub fn command(&self) -> Option<&'l str> {
        self.argv.first().copied()
    }

    /// Whether the line held more tokens than fit.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Whether the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}
