//! Runtime shell configuration.
//!
//! Buffer sizes are fixed at compile time through the const parameters of
//! [`Shell`](crate::shell::Shell). Everything that can change without
//! resizing a buffer lives here and is passed in at construction.
//!
//! A configuration can be built in code or loaded from a small JSON document,
//! for example one stored in a flash sector:
//!
//! ```rust
//! use tinyshell::config::Config;
//!
//! let config = Config::from_json(r#"{"prompt":"dev$ ","echo":false}"#).unwrap();
//! assert_eq!(config.prompt, "dev$ ");
//! assert!(!config.echo);
//! // Missing fields fall back to the defaults.
//! assert_eq!(config.banner, "--- Tiny Shell Ready ---");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Prompt printed before every input line.
pub const DEFAULT_PROMPT: &str = "> ";

/// Banner printed once by [`Shell::init`](crate::shell::Shell::init).
pub const DEFAULT_BANNER: &str = "--- Tiny Shell Ready ---";

/// Longest accepted prompt, in bytes.
pub const MAX_PROMPT_LEN: usize = 32;

/// Shell settings that do not affect buffer sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config<'a> {
    /// Prompt printed before every input line and on redraw.
    pub prompt: &'a str,

    /// Line printed by [`Shell::init`](crate::shell::Shell::init). An empty
    /// banner only prints the leading line break.
    pub banner: &'a str,

    /// Echo typed characters, erase sequences and the line break after a
    /// submitted line. Turn this off when the terminal echoes locally.
    pub echo: bool,

    /// Signal overflow instead of dropping input silently.
    ///
    /// A character that does not fit in the line buffer is answered with a
    /// terminal bell (`0x07`), and a line with more tokens than the argument
    /// capacity prints a notice before the truncated command runs.
    pub overflow_notice: bool,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT,
            banner: DEFAULT_BANNER,
            echo: true,
            overflow_notice: false,
        }
    }
}

impl<'a> Config<'a> {
    /// Parse a configuration from JSON and validate it.
    ///
    /// Strings are borrowed from `json`, so they must not contain escape
    /// sequences.
    pub fn from_json(json: &'a str) -> Result<Self, Error> {
        let (config, _): (Config<'a>, usize) =
            serde_json_core::from_str(json).map_err(|_| Error::InvalidConfig)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the prompt and banner can be written to a terminal as-is.
    pub fn validate(&self) -> Result<(), Error> {
        if self.prompt.is_empty() || !is_printable(self.prompt) {
            return Err(Error::InvalidPrompt);
        }
        if self.prompt.len() > MAX_PROMPT_LEN {
            return Err(Error::PromptTooLong);
        }
        if !is_printable(self.banner) {
            return Err(Error::InvalidBanner);
        }
        Ok(())
    }
}

fn is_printable(text: &str) -> bool {
    text.bytes().all(|b| (0x20..0x7F).contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.prompt, "> ");
        assert!(config.echo);
        assert!(!config.overflow_notice);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_prompt() {
        let config = Config {
            prompt: "",
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidPrompt));
    }

    #[test]
    fn rejects_control_characters() {
        let config = Config {
            prompt: "a\r\n> ",
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidPrompt));

        let config = Config {
            banner: "\x1b[2J",
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidBanner));
    }

    #[test]
    fn rejects_long_prompt() {
        let config = Config {
            prompt: "this prompt is much longer than thirty-two bytes> ",
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::PromptTooLong));
    }

    #[test]
    fn loads_json() {
        let config =
            Config::from_json(r#"{"prompt":"$ ","banner":"","echo":true,"overflow_notice":true}"#)
                .unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.banner, "");
        assert!(config.overflow_notice);
    }

    #[test]
    fn json_round_trip() {
        let config = Config {
            prompt: "uart$ ",
            banner: "",
            echo: false,
            overflow_notice: true,
        };
        let json: heapless::String<128> = serde_json_core::to_string(&config).unwrap();
        assert_eq!(
            json.as_str(),
            r#"{"prompt":"uart$ ","banner":"","echo":false,"overflow_notice":true}"#
        );
        assert_eq!(Config::from_json(&json), Ok(config));
    }

    #[test]
    fn json_errors_are_reported() {
        assert_eq!(Config::from_json("{"), Err(Error::InvalidConfig));
        assert_eq!(
            Config::from_json(r#"{"prompt":""}"#),
            Err(Error::InvalidPrompt)
        );
    }
}
