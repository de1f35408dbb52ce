//! Command table entries and the handler calling convention.

use core::fmt;

use crate::sink::Sink;

/// Result type for command handlers.
///
/// The shell logs anything other than [`ShellResult::Ok`] and carries on;
/// the user-facing explanation is the handler's own job.
///
/// # Examples
///
/// ```rust
/// use tinyshell::shell::{Context, ShellResult};
///
/// fn reboot(ctx: &mut Context<'_, '_>, argc: usize, _argv: &[&str]) -> ShellResult {
///     if argc != 1 {
///         ctx.put_str("Usage: reboot\r\n");
///         return ShellResult::InvalidParameter;
///     }
///     ctx.put_str("Rebooting...\r\n");
///     ShellResult::Ok
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellResult {
    /// Command completed successfully.
    Ok,
    /// Invalid parameter was provided to the command.
    InvalidParameter,
    /// Insufficient memory to complete the command.
    OutOfMemory,
    /// A fixed-size buffer was too small.
    BufferOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ShellResult {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ShellResult::Ok => defmt::write!(f, "Ok"),
            ShellResult::InvalidParameter => defmt::write!(f, "InvalidParameter"),
            ShellResult::OutOfMemory => defmt::write!(f, "OutOfMemory"),
            ShellResult::BufferOverflow => defmt::write!(f, "BufferOverflow"),
        }
    }
}

/// Function signature for command handlers.
///
/// Handlers receive the argument count and the arguments themselves;
/// `argv[0]` is always the command name. The arguments borrow the line
/// buffer, which is cleared as soon as the handler returns, so they cannot
/// be kept. All output goes through `ctx`.
pub type CommandFn = fn(ctx: &mut Context<'_, '_>, argc: usize, argv: &[&str]) -> ShellResult;

/// One entry of the command table.
///
/// Tables are plain slices scanned in order; the first entry whose name
/// matches exactly (case-sensitive) wins.
///
/// ```rust
/// use tinyshell::shell::{Command, Context, ShellResult};
///
/// fn version(ctx: &mut Context<'_, '_>, _argc: usize, _argv: &[&str]) -> ShellResult {
///     ctx.put_str("v1.0.0\r\n");
///     ShellResult::Ok
/// }
///
/// static COMMANDS: &[Command] = &[Command {
///     name: "version",
///     help: "Show firmware version",
///     handler: version,
/// }];
/// ```
#[derive(Clone, Copy)]
pub struct Command {
    /// The command name as typed by the user.
    pub name: &'static str,

    /// One-line description listed by `help`.
    pub help: &'static str,

    /// The function that implements the command.
    pub handler: CommandFn,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Look up `name` in `commands`, first exact match wins.
pub fn find<'c>(commands: &'c [Command], name: &str) -> Option<&'c Command> {
    commands.iter().find(|command| command.name == name)
}

/// What a handler can reach while it runs.
///
/// Writes go straight to the caller's sink. `Context` also implements
/// [`core::fmt::Write`], so handlers can use `write!` for formatted output.
pub struct Context<'s, 'c> {
    sink: &'s mut dyn Sink,
    commands: &'c [Command],
}

impl<'s, 'c> Context<'s, 'c> {
    /// Wrap a sink and the table the command was found in.
    pub fn new(sink: &'s mut dyn Sink, commands: &'c [Command]) -> Self {
        Self { sink, commands }
    }

    /// Emit a string.
    pub fn put_str(&mut self, text: &str) {
        self.sink.put_str(text);
    }

    /// Emit a single byte.
    pub fn put_char(&mut self, byte: u8) {
        self.sink.put_char(byte);
    }

    /// The command table, in lookup order.
    pub fn commands(&self) -> &'c [Command] {
        self.commands
    }
}

impl fmt::Write for Context<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.put_str(s);
        Ok(())
    }
}

impl fmt::Debug for Context<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}
