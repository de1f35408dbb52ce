//! # tinyshell - interactive shell for UART-class devices
//!
//! A command shell that is fed one received byte at a time and answers
//! through a caller-supplied output sink. It is designed for embedded
//! systems and supports `no_std` environments: all buffers are fixed-size,
//! nothing is allocated, and no call ever blocks.
//!
//! ## Features
//!
//! - **Line editing**: printable ASCII input with echo, backspace/delete
//! - **History**: fixed ring of executed lines, recalled with the Up arrow
//! - **Dispatch**: space-separated arguments, first-match lookup in a static
//!   command table
//! - **Configurable**: prompt, banner, echo and overflow notices at runtime,
//!   buffer sizes as const generics
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tinyshell = "0.1.0"
//! ```
//!
//! ### Driving the shell from a receive loop
//!
//! ```rust,no_run
//! use tinyshell::commands::DEFAULT_COMMANDS;
//! use tinyshell::shell::Shell;
//! use tinyshell::sink::Sink;
//!
//! struct Uart;
//!
//! impl Uart {
//!     fn read_byte(&mut self) -> u8 {
//!         // Poll the receive register
//!         b'\r'
//!     }
//! }
//!
//! impl Sink for Uart {
//!     fn put_char(&mut self, _byte: u8) {
//!         // Write the transmit register
//!     }
//! }
//!
//! let mut uart = Uart;
//! let mut shell: Shell = Shell::new(DEFAULT_COMMANDS);
//! shell.init(&mut uart);
//!
//! loop {
//!     let byte = uart.read_byte();
//!     shell.process_char(byte, &mut uart);
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (`Sink` for `String`, the
//!   `tinyshell` demo binary)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Built-in commands and the default command table.
pub mod commands;

/// Runtime configuration.
pub mod config;

/// Error types for shell construction.
pub mod error;

/// The character-processing engine.
///
/// Escape sequence recognition, line editing, history and dispatch.
pub mod shell;

/// Output abstraction the shell writes through.
pub mod sink;

pub use config::Config;
pub use error::Error;
pub use shell::{Command, Context, Shell, ShellResult};
pub use sink::Sink;
