//! Raw keystroke decoding.
//!
//! The frontend hands the engine exactly what one blocking read produced: a
//! 1-to-3 byte frame. A length-1 frame is a literal or control key; a
//! length-3 frame is an escape sequence whose trailing byte carries the
//! navigation code. This framing is the wire protocol between the terminal
//! collaborator and the dispatcher and is preserved as-is.
//!
//! The navigation vocabulary is deliberately narrow. An escape frame with a
//! trailing byte outside the code table is a [`DecodeError`], not a silent
//! ignore: an unknown sequence reaching the engine means the frontend's
//! framing is broken.

use thiserror::Error;

/// Escape key byte (arrives as a length-1 frame).
pub const ESCAPE: u8 = 27;
/// Backspace byte.
pub const BACKSPACE: u8 = 127;
/// Ctrl+Q, the session-terminate chord.
pub const CTRL_Q: u8 = 17;

// Trailing bytes of the 3-byte escape frames.
const CODE_ARROW_UP: u8 = 65;
const CODE_ARROW_DOWN: u8 = 66;
const CODE_ARROW_RIGHT: u8 = 67;
const CODE_ARROW_LEFT: u8 = 68;
const CODE_END: u8 = 70;
const CODE_HOME: u8 = 72;

/// Navigation key decoded from a 3-byte escape frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow right.
    Right,
    /// Arrow left.
    Left,
    /// End of line.
    End,
    /// Start of line.
    Home,
}

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Literal or control key from a length-1 frame.
    Byte(u8),
    /// Navigation key from a length-3 escape frame.
    Nav(NavKey),
}

/// Keystroke frames the decoder refuses.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unrecognized escape code {0}")]
    /// Escape frame with a trailing byte outside the navigation table.
    UnrecognizedEscape(u8),

    #[error("malformed {0}-byte keystroke frame")]
    /// A read produced a frame length the protocol does not define.
    MalformedFrame(usize),
}

/// Decode one keystroke frame.
pub fn decode(frame: &[u8]) -> Result<Key, DecodeError> {
    match frame {
        [byte] => Ok(Key::Byte(*byte)),
        [_, _, code] => match *code {
            CODE_ARROW_UP => Ok(Key::Nav(NavKey::Up)),
            CODE_ARROW_DOWN => Ok(Key::Nav(NavKey::Down)),
            CODE_ARROW_RIGHT => Ok(Key::Nav(NavKey::Right)),
            CODE_ARROW_LEFT => Ok(Key::Nav(NavKey::Left)),
            CODE_END => Ok(Key::Nav(NavKey::End)),
            CODE_HOME => Ok(Key::Nav(NavKey::Home)),
            other => Err(DecodeError::UnrecognizedEscape(other)),
        },
        other => Err(DecodeError::MalformedFrame(other.len())),
    }
}
