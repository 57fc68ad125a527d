//! Semantic command vocabulary and per-mode key interpretation.
//!
//! [`interpret`] is a pure function from (mode, decoded key) to at most one
//! command. It performs no bounds checking and no mutation; the editor
//! validates movement against the buffer before applying it. Keeping the
//! key tables here, isolated from the movement logic, makes both sides
//! testable on their own.

use crate::input::{BACKSPACE, CTRL_Q, ESCAPE, Key, NavKey};
use crate::mode::Mode;

/// A semantic editing command produced from one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bounds-checked cursor movement.
    Move(NavKey),
    /// Switch Navigation → Insertion.
    EnterInsert,
    /// Home the cursor, then switch Navigation → Insertion.
    EnterInsertAtLineStart,
    /// Switch Insertion → Navigation.
    LeaveInsert,
    /// Delete the character left of the cursor.
    DeleteBack,
    /// Insert a literal byte at the cursor.
    Insert(u8),
    /// Terminate the session.
    Quit,
}

/// Interpret a decoded keystroke under the current mode.
///
/// Returns `None` for keys that are meaningless in the current mode; they
/// are ignored without error. The quit chord is checked before mode-specific
/// dispatch, so it fires in either mode. Decoded navigation keys act as
/// cursor movement in both modes.
pub fn interpret(mode: Mode, key: Key) -> Option<Command> {
    if key == Key::Byte(CTRL_Q) {
        return Some(Command::Quit);
    }

    match (mode, key) {
        (_, Key::Nav(nav)) => Some(Command::Move(nav)),
        (Mode::Navigation, Key::Byte(byte)) => match byte {
            b'h' => Some(Command::Move(NavKey::Left)),
            b'j' => Some(Command::Move(NavKey::Down)),
            b'k' => Some(Command::Move(NavKey::Up)),
            b'l' => Some(Command::Move(NavKey::Right)),
            b'i' => Some(Command::EnterInsert),
            b'I' => Some(Command::EnterInsertAtLineStart),
            _ => None,
        },
        (Mode::Insertion, Key::Byte(byte)) => match byte {
            ESCAPE => Some(Command::LeaveInsert),
            BACKSPACE => Some(Command::DeleteBack),
            // Line splitting is out of scope, so Enter and the remaining
            // control bytes are ignored rather than inserted.
            byte if byte == b' ' || byte.is_ascii_graphic() => Some(Command::Insert(byte)),
            _ => None,
        },
    }
}
