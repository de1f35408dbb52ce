//! Character-at-a-time command shell.
//!
//! The shell is fed one received byte at a time and writes everything it
//! has to say to a caller-supplied [`Sink`]. It owns no transport, never
//! blocks and never allocates, so it can be polled straight from a UART
//! receive loop.
//!
//! # Architecture
//!
//! ```text
//!  byte ─▶ EscapeState ──Consumed──▶ (dropped)
//!              │  └─────RecallPrevious──▶ HistoryRing ─▶ LineBuffer ─▶ redraw
//!         PassThrough
//!              ▼
//!         LineBuffer ──CR/LF──▶ HistoryRing::record
//!                                    │
//!                                    ▼
//!                              Arguments::parse ─▶ command table ─▶ handler
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinyshell::commands::DEFAULT_COMMANDS;
//! use tinyshell::shell::Shell;
//!
//! let mut out: heapless::String<512> = heapless::String::new();
//! let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
//!
//! shell.init(&mut out);
//! shell.input(b"status\r", &mut out);
//! assert!(out.contains("System status: OK"));
//! ```
//!
//! # Wire conventions
//!
//! - Every emitted line ends with `\r\n`.
//! - `\r` and `\n` each submit the line on their own. A `\r\n` pair submits
//!   twice; the second, empty line does nothing but print a prompt.
//! - Backspace is `0x08` or `0x7F`.
//! - Up arrow (`ESC [ A`) recalls the previous history entry. Other escape
//!   sequences are swallowed.

pub mod command;
pub mod escape;
pub mod history;
pub mod line;
pub mod parser;

pub use command::{Command, CommandFn, Context, ShellResult};
pub use escape::{Action, EscapeState};
pub use history::HistoryRing;
pub use line::LineBuffer;
pub use parser::Arguments;

use crate::config::Config;
use crate::error::Error;
use crate::sink::Sink;

/// Default line buffer size. Lines hold one byte less.
pub const DEFAULT_LINE_CAPACITY: usize = 64;

/// Default number of history entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default maximum number of arguments, command name included.
pub const DEFAULT_MAX_ARGS: usize = 8;

// ASCII control character constants for input processing
/// ASCII bell character (0x07).
pub const ASCII_BELL: u8 = 0x07;
/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;

/// Line terminator used for all output.
pub const CRLF: &str = "\r\n";

/// Backspace, space, backspace: visually removes one character.
pub const ERASE_SEQUENCE: &str = "\x08 \x08";

/// Prefix of the message for a name not in the command table.
pub const UNKNOWN_COMMAND: &str = "Unknown command: ";

/// Printed before dispatch when arguments were dropped and overflow
/// notices are enabled.
pub const TOO_MANY_ARGUMENTS: &str = "Too many arguments, extra ignored\r\n";

const BLANKS: &str = "                ";

/// Interactive shell state.
///
/// `LINE` is the line buffer size (lines hold `LINE - 1` bytes), `HISTORY`
/// the number of remembered lines and `ARGS` the most arguments passed to a
/// handler. The defaults match a small UART console; use a type annotation
/// to pick them up:
///
/// ```rust
/// use tinyshell::commands::DEFAULT_COMMANDS;
/// use tinyshell::shell::Shell;
///
/// let default: Shell = Shell::new(DEFAULT_COMMANDS);
/// let tiny: Shell<'_, 16, 2, 3> = Shell::new(DEFAULT_COMMANDS);
/// assert_eq!(tiny.history().capacity(), 2);
/// # let _ = default;
/// ```
#[derive(Debug)]
pub struct Shell<
    'a,
    const LINE: usize = DEFAULT_LINE_CAPACITY,
    const HISTORY: usize = DEFAULT_HISTORY_CAPACITY,
    const ARGS: usize = DEFAULT_MAX_ARGS,
> {
    line: LineBuffer<LINE>,
    history: HistoryRing<LINE, HISTORY>,
    escape: EscapeState,
    commands: &'a [Command],
    config: Config<'a>,
}

impl<'a, const LINE: usize, const HISTORY: usize, const ARGS: usize>
    Shell<'a, LINE, HISTORY, ARGS>
{
    /// Create a shell over `commands` with the default [`Config`].
    pub fn new(commands: &'a [Command]) -> Self {
        Self::build(commands, Config::default())
    }

    /// Create a shell with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`Config::validate`].
    pub fn with_config(commands: &'a [Command], config: Config<'a>) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::build(commands, config))
    }

    fn build(commands: &'a [Command], config: Config<'a>) -> Self {
        const { assert!(LINE >= 2, "line buffer must hold at least one character") };
        const { assert!(ARGS >= 1, "at least the command name must fit") };
        Self {
            line: LineBuffer::new(),
            history: HistoryRing::new(),
            escape: EscapeState::Normal,
            commands,
            config,
        }
    }

    /// Reset all state and print the banner and first prompt.
    pub fn init(&mut self, sink: &mut dyn Sink) {
        self.line.clear();
        self.history.clear();
        self.escape = EscapeState::Normal;

        sink.put_str(CRLF);
        if !self.config.banner.is_empty() {
            sink.put_str(self.config.banner);
            sink.put_str(CRLF);
        }
        sink.put_str(self.config.prompt);
        debug!("shell initialised");
    }

    /// Feed a sequence of received bytes, in order.
    pub fn input(&mut self, data: &[u8], sink: &mut dyn Sink) {
        for &byte in data {
            self.process_char(byte, sink);
        }
    }

    /// Process one received byte.
    ///
    /// # Character Handling
    ///
    /// - **Escape sequences**: swallowed; Up arrow recalls history
    /// - **CR/LF**: executes the line and prints a fresh prompt
    /// - **Backspace/Delete**: removes the last character with visual feedback
    /// - **Printable ASCII**: appended and echoed, dropped when the line is full
    /// - **Anything else**: ignored
    pub fn process_char(&mut self, byte: u8, sink: &mut dyn Sink) {
        let (state, action) = self.escape.feed(byte);
        self.escape = state;

        match action {
            Action::Consumed => {}
            Action::RecallPrevious => self.recall_previous(sink),
            Action::PassThrough => self.edit(byte, sink),
        }
    }

    fn edit(&mut self, byte: u8, sink: &mut dyn Sink) {
        match byte {
            ASCII_CR | ASCII_LF => {
                if self.config.echo {
                    sink.put_str(CRLF);
                }
                self.execute(sink);
                self.line.clear();
                sink.put_str(self.config.prompt);
            }
            ASCII_BACKSPACE | ASCII_DEL => {
                if self.line.pop() && self.config.echo {
                    sink.put_str(ERASE_SEQUENCE);
                }
            }
            _ if line::is_printable(byte) => {
                if self.line.push(byte) {
                    if self.config.echo {
                        sink.put_char(byte);
                    }
                } else {
                    trace!("line full, dropped {=u8:#x}", byte);
                    if self.config.overflow_notice {
                        sink.put_char(ASCII_BELL);
                    }
                }
            }
            _ => {}
        }
    }

    fn recall_previous(&mut self, sink: &mut dyn Sink) {
        match self.history.recall_previous() {
            Some(entry) => self.line.set(entry),
            None => {
                trace!("recall refused, no older entry");
                return;
            }
        }
        self.redraw(sink);
    }

    /// Blank the terminal line, then print the prompt and the current line.
    ///
    /// The blanking always covers the prompt plus a full line, so whatever
    /// was visible before is gone.
    pub fn redraw(&self, sink: &mut dyn Sink) {
        sink.put_char(ASCII_CR);
        let mut remaining = self.config.prompt.len() + LineBuffer::<LINE>::LIMIT;
        while remaining > 0 {
            let chunk = remaining.min(BLANKS.len());
            sink.put_str(&BLANKS[..chunk]);
            remaining -= chunk;
        }
        sink.put_char(ASCII_CR);
        sink.put_str(self.config.prompt);
        sink.put_str(self.line.as_str());
    }

    /// Run the current line: record it, parse it and dispatch it.
    fn execute(&mut self, sink: &mut dyn Sink) {
        if self.line.is_empty() {
            return;
        }

        if self.history.record(self.line.as_str()) {
            trace!("history: stored at {=usize}", self.history.write_index());
        } else {
            trace!("history: repeat of newest entry");
        }

        let args: Arguments<'_, ARGS> = Arguments::parse(self.line.as_str());
        let Some(name) = args.command() else {
            return;
        };

        if args.truncated() {
            warn!("{=str}: arguments beyond {=usize} dropped", name, ARGS);
            if self.config.overflow_notice {
                sink.put_str(TOO_MANY_ARGUMENTS);
            }
        }

        match command::find(self.commands, name) {
            Some(command) => {
                debug!("dispatch {=str} argc={=usize}", name, args.argc());
                let mut ctx = Context::new(&mut *sink, self.commands);
                let result = (command.handler)(&mut ctx, args.argc(), args.argv());
                if result != ShellResult::Ok {
                    warn!("{=str} returned {}", name, result);
                }
            }
            None => {
                warn!("unknown command {=str}", name);
                sink.put_str(UNKNOWN_COMMAND);
                sink.put_str(name);
                sink.put_str(CRLF);
            }
        }
    }

    /// The line being edited.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Previously executed lines.
    pub fn history(&self) -> &HistoryRing<LINE, HISTORY> {
        &self.history
    }

    /// Where the escape sequence recogniser currently is.
    pub fn escape_state(&self) -> EscapeState {
        self.escape
    }

    /// The command table in lookup order.
    pub fn commands(&self) -> &'a [Command] {
        self.commands
    }

    /// Active configuration.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }
}
