//! The in-progress input line.

use heapless::String;

/// Fixed-capacity line being edited.
///
/// Holds at most `CAP - 1` printable ASCII bytes, leaving the last slot of
/// the capacity unused the way a NUL-terminated UART buffer would. Only
/// end-of-line edits exist: append, remove last, clear, and overwrite from
/// history.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const CAP: usize> {
    text: String<CAP>,
}

impl<const CAP: usize> LineBuffer<CAP> {
    /// Maximum number of bytes the line can hold.
    pub const LIMIT: usize = CAP.saturating_sub(1);

    /// Create an empty line.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a printable ASCII byte.
    ///
    /// Returns `false` without changing the line if the byte is not
    /// printable or the line is full.
    pub fn push(&mut self, byte: u8) -> bool {
        if !is_printable(byte) || self.is_full() {
            return false;
        }
        self.text.push(byte as char).is_ok()
    }

    /// Remove the last byte. Returns `false` if the line was empty.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Empty the line.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the whole line, truncating to [`LIMIT`](Self::LIMIT) bytes.
    pub fn set(&mut self, line: &str) {
        self.text.clear();
        for byte in line.bytes() {
            if !self.push(byte) {
                break;
            }
        }
    }

    /// Current contents.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Number of bytes in the line.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether another byte would be dropped.
    pub fn is_full(&self) -> bool {
        self.text.len() >= Self::LIMIT
    }
}

/// Printable ASCII range accepted into a line.
pub(crate) fn is_printable(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}
