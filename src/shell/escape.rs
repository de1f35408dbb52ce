//! ANSI escape sequence recognition.
//!
//! Terminals send arrow keys as three-byte CSI sequences (`ESC [ A` for Up).
//! The shell only acts on Up; every other sequence is swallowed so that it
//! never lands in the line buffer.

/// Escape introducer byte.
pub const ASCII_ESC: u8 = 0x1B;

/// Control sequence introducer, the second byte of an arrow key.
pub const CSI_BRACKET: u8 = b'[';

/// Final byte of the Up arrow sequence.
pub const CSI_UP: u8 = b'A';

/// Position inside an escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeState {
    /// Not inside a sequence.
    #[default]
    Normal,
    /// `ESC` received.
    SawEscape,
    /// `ESC [` received.
    SawBracket,
}

/// What the caller should do with the byte just fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The byte belongs to an escape sequence and must not be edited or echoed.
    Consumed,
    /// The byte is ordinary input.
    PassThrough,
    /// An Up arrow completed; recall the previous history entry.
    RecallPrevious,
}

impl EscapeState {
    /// Advance the state machine by one byte.
    ///
    /// Every sequence terminates within three bytes. Unrecognised or
    /// malformed sequences drop back to [`EscapeState::Normal`] without
    /// passing any of their bytes through.
    pub fn feed(self, byte: u8) -> (EscapeState, Action) {
        match self {
            EscapeState::Normal => {
                if byte == ASCII_ESC {
                    (EscapeState::SawEscape, Action::Consumed)
                } else {
                    (EscapeState::Normal, Action::PassThrough)
                }
            }
            EscapeState::SawEscape => {
                if byte == CSI_BRACKET {
                    (EscapeState::SawBracket, Action::Consumed)
                } else {
                    (EscapeState::Normal, Action::Consumed)
                }
            }
            EscapeState::SawBracket => {
                if byte == CSI_UP {
                    (EscapeState::Normal, Action::RecallPrevious)
                } else {
                    // Down, Right, Left and anything else are inert
                    (EscapeState::Normal, Action::Consumed)
                }
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EscapeState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EscapeState::Normal => defmt::write!(f, "Normal"),
            EscapeState::SawEscape => defmt::write!(f, "SawEscape"),
            EscapeState::SawBracket => defmt::write!(f, "SawBracket"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bytes: &[u8]) -> (EscapeState, [Option<Action>; 4]) {
        let mut state = EscapeState::Normal;
        let mut actions = [None; 4];
        for (i, &b) in bytes.iter().enumerate() {
            let (next, action) = state.feed(b);
            state = next;
            actions[i] = Some(action);
        }
        (state, actions)
    }

    #[test]
    fn ordinary_bytes_pass_through() {
        for b in [b'a', b' ', b'\r', 0x08, 0x7F, b'['] {
            assert_eq!(
                EscapeState::Normal.feed(b),
                (EscapeState::Normal, Action::PassThrough)
            );
        }
    }

    #[test]
    fn up_arrow_recalls() {
        let (state, actions) = run(b"\x1b[A");
        assert_eq!(state, EscapeState::Normal);
        assert_eq!(
            actions[..3],
            [
                Some(Action::Consumed),
                Some(Action::Consumed),
                Some(Action::RecallPrevious)
            ]
        );
    }

    #[test]
    fn other_arrows_are_swallowed() {
        for last in [b'B', b'C', b'D', b'Z', b'1'] {
            let (state, actions) = run(&[ASCII_ESC, CSI_BRACKET, last]);
            assert_eq!(state, EscapeState::Normal);
            assert_eq!(actions[2], Some(Action::Consumed));
        }
    }

    #[test]
    fn malformed_sequence_is_dropped() {
        // ESC followed by anything but '[' ends the sequence and eats that byte
        let (state, actions) = run(b"\x1bxa");
        assert_eq!(state, EscapeState::Normal);
        assert_eq!(actions[1], Some(Action::Consumed));
        assert_eq!(actions[2], Some(Action::PassThrough));
    }

    #[test]
    fn double_escape_is_consumed() {
        let (state, actions) = run(b"\x1b\x1b[");
        assert_eq!(state, EscapeState::Normal);
        assert_eq!(actions[1], Some(Action::Consumed));
        assert_eq!(actions[2], Some(Action::PassThrough));
    }
}
