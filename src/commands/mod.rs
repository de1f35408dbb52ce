//! Built-in command table.
//!
//! A ready-to-use set of commands for bring-up and demos:
//!
//! | Command  | Description |
//! |----------|-------------|
//! | `help`   | Lists every command of the active table with its help text |
//! | `led`    | `led <num> <on\|off>`, acknowledges an LED change |
//! | `status` | Prints a fixed system status report |
//!
//! `help` walks whatever table the shell was built with, so it can be reused
//! in custom tables:
//!
//! ```rust
//! use tinyshell::commands;
//! use tinyshell::shell::{Command, Context, ShellResult};
//!
//! fn reset(ctx: &mut Context<'_, '_>, _argc: usize, _argv: &[&str]) -> ShellResult {
//!     ctx.put_str("Resetting\r\n");
//!     ShellResult::Ok
//! }
//!
//! static MY_COMMANDS: &[Command] = &[
//!     commands::HELP,
//!     Command { name: "reset", help: "Reset the board", handler: reset },
//! ];
//! ```

use core::fmt::Write;

use crate::shell::{CRLF, Command, Context, ShellResult};

/// Header line printed by `help`.
pub const HELP_HEADER: &str = "Available commands:\r\n";

/// Usage message printed by `led` when the argument count is wrong.
pub const LED_USAGE: &str = "Usage: led <num> <on|off>\r\n";

/// `help` entry.
pub const HELP: Command = Command {
    name: "help",
    help: "Show this help",
    handler: help,
};

/// `led` entry.
pub const LED: Command = Command {
    name: "led",
    help: "Control an LED: led <num> <on|off>",
    handler: led,
};

/// `status` entry.
pub const STATUS: Command = Command {
    name: "status",
    help: "Show system status",
    handler: status,
};

/// The default command table: `help`, `led`, `status`.
pub static DEFAULT_COMMANDS: &[Command] = &[HELP, LED, STATUS];

/// List every command of the active table in lookup order.
pub fn help(ctx: &mut Context<'_, '_>, _argc: usize, _argv: &[&str]) -> ShellResult {
    ctx.put_str(HELP_HEADER);
    for command in ctx.commands() {
        ctx.put_str("  ");
        ctx.put_str(command.name);
        ctx.put_str("\t- ");
        ctx.put_str(command.help);
        ctx.put_str(CRLF);
    }
    ShellResult::Ok
}

/// Switch an LED on or off.
///
/// Only validates and acknowledges the request; driving the pin belongs to
/// the board support code.
pub fn led(ctx: &mut Context<'_, '_>, argc: usize, argv: &[&str]) -> ShellResult {
    if argc != 3 {
        ctx.put_str(LED_USAGE);
        return ShellResult::InvalidParameter;
    }

    let Ok(number) = argv[1].parse::<u8>() else {
        ctx.put_str("Error: invalid LED number\r\n");
        return ShellResult::InvalidParameter;
    };

    let state = match argv[2] {
        "on" => "on",
        "off" => "off",
        _ => {
            ctx.put_str("Error: state must be 'on' or 'off'\r\n");
            return ShellResult::InvalidParameter;
        }
    };

    let _ = write!(ctx, "Action: LED {} set to {}\r\n", number, state);
    ShellResult::Ok
}

/// Report system health.
pub fn status(ctx: &mut Context<'_, '_>, _argc: usize, _argv: &[&str]) -> ShellResult {
    ctx.put_str("System status: OK\r\n");
    ctx.put_str("CPU temperature: 42 C\r\n");
    ShellResult::Ok
}
