//! Output side of the shell.
//!
//! The shell never owns its transport. Every call that can produce output
//! takes a `&mut dyn Sink`, which the caller backs with a UART driver, a
//! terminal, or a capture buffer in tests.
//!
//! ```rust
//! use tinyshell::sink::Sink;
//!
//! struct Uart;
//!
//! impl Sink for Uart {
//!     fn put_char(&mut self, byte: u8) {
//!         // Write `byte` to the transmit register
//!         let _ = byte;
//!     }
//! }
//! ```

use core::str;

/// Byte-oriented text output.
///
/// Only [`put_char`](Sink::put_char) is required. Transports that can send a
/// whole buffer at once should also override [`put_str`](Sink::put_str).
pub trait Sink {
    /// Emit a single byte.
    fn put_char(&mut self, byte: u8);

    /// Emit a string.
    fn put_str(&mut self, text: &str) {
        for byte in text.bytes() {
            self.put_char(byte);
        }
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put_char(&mut self, byte: u8) {
        (**self).put_char(byte);
    }

    fn put_str(&mut self, text: &str) {
        (**self).put_str(text);
    }
}

/// Function signature for plain output handlers.
///
/// Handy for targets whose UART driver is a free function:
///
/// ```rust
/// use tinyshell::sink::{OutputFn, Sink};
///
/// fn uart_write(text: &str) {
///     print!("{}", text);
/// }
///
/// let mut out: OutputFn = uart_write;
/// out.put_str("ready\r\n");
/// ```
pub type OutputFn = fn(&str);

impl Sink for OutputFn {
    fn put_char(&mut self, byte: u8) {
        let ch = [byte];
        if let Ok(s) = str::from_utf8(&ch) {
            (*self)(s);
        }
    }

    fn put_str(&mut self, text: &str) {
        (*self)(text);
    }
}

/// Fixed-capacity capture buffer. Output is truncated at the capacity.
impl<const N: usize> Sink for heapless::String<N> {
    fn put_char(&mut self, byte: u8) {
        if byte.is_ascii() {
            let _ = self.push(byte as char);
        }
    }

    fn put_str(&mut self, text: &str) {
        // push_str is all-or-nothing, keep whatever fits
        for ch in text.chars() {
            if self.push(ch).is_err() {
                break;
            }
        }
    }
}

#[cfg(feature = "std")]
impl Sink for std::string::String {
    fn put_char(&mut self, byte: u8) {
        if byte.is_ascii() {
            self.push(byte as char);
        }
    }

    fn put_str(&mut self, text: &str) {
        self.push_str(text);
    }
}
