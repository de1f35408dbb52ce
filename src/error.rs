//! Common error types for shell construction and configuration

/// A common error type for setting up a shell.
///
/// Character processing itself never fails; every runtime fault is reported
/// as text through the sink. This enum only covers the fallible steps that
/// happen before the first byte is fed: loading and validating a
/// [`Config`](crate::config::Config).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The configuration document could not be parsed.
    InvalidConfig,
    /// The prompt is empty or contains non-printable characters.
    InvalidPrompt,
    /// The prompt is longer than [`MAX_PROMPT_LEN`](crate::config::MAX_PROMPT_LEN).
    PromptTooLong,
    /// The banner contains non-printable characters.
    InvalidBanner,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidConfig => f.write_str("invalid configuration document"),
            Error::InvalidPrompt => f.write_str("prompt must be non-empty printable ASCII"),
            Error::PromptTooLong => f.write_str("prompt is too long"),
            Error::InvalidBanner => f.write_str("banner must be printable ASCII"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
            Error::InvalidPrompt => defmt::write!(f, "InvalidPrompt"),
            Error::PromptTooLong => defmt::write!(f, "PromptTooLong"),
            Error::InvalidBanner => defmt::write!(f, "InvalidBanner"),
        }
    }
}
