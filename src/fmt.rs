//! Internal logging macros.
//!
//! When the `defmt` feature is enabled these forward to the matching `defmt`
//! macro. Without it they expand to nothing, so the engine carries no
//! formatting cost on targets that do not log. The module is declared with
//! `#[macro_use]` ahead of every other module so the macros are in scope
//! crate-wide.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
    }};
}
