//! The editing engine: modal dispatch over cursor, buffer, and viewport.
//!
//! [`Editor`] owns the whole editing state and exposes the three calls the
//! session loop needs: [`Editor::handle_key`] to apply one keystroke frame,
//! [`Editor::scroll_to_cursor`] to re-establish the scroll invariant, and
//! [`Editor::render`] to compose the next frame. Strict turn-taking in the
//! loop means a keystroke's mutation always completes before the redraw
//! that follows it.
//!
//! Movement is bounds-checked here, against the buffer, before the cursor
//! is touched: the cursor itself never looks at the document. Out-of-range
//! movement commands are dropped silently; out-of-range *buffer* access is
//! a [`PositionError`], which validated dispatch paths never produce.

use thiserror::Error;

use crate::buffer::{LineBuffer, PositionError};
use crate::commands::{Command, interpret};
use crate::cursor::Cursor;
use crate::input::{DecodeError, NavKey, decode};
use crate::mode::{CursorShape, Mode};
use crate::render::{DrawOp, compose_frame};
use crate::viewport::Viewport;

/// Errors surfaced by keystroke handling.
///
/// Both variants are contract violations in normal operation: the frontend
/// frames keystrokes per the read protocol, and the dispatcher validates
/// positions before mutating. They abort the session rather than degrade.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Keystroke frame the decoder refused.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Buffer access with an out-of-range position.
    #[error(transparent)]
    Position(#[from] PositionError),
}

/// What the session loop should do after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep reading input.
    Continue,
    /// Quit was requested; leave the loop.
    Quit,
}

/// One document, one cursor, one mode, one viewport.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: LineBuffer,
    cursor: Cursor,
    mode: Mode,
    viewport: Viewport,
}

impl Editor {
    /// Create an engine over `lines` with a viewport of `rows` text rows by
    /// `columns` cells.
    pub fn new(lines: Vec<String>, rows: usize, columns: usize) -> Self {
        Self {
            buffer: LineBuffer::from_lines(lines),
            cursor: Cursor::new(),
            mode: Mode::default(),
            viewport: Viewport::new(rows, columns),
        }
    }

    /// The document buffer.
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The editing cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The active input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Cursor glyph implied by the active mode.
    pub fn cursor_shape(&self) -> CursorShape {
        self.mode.cursor_shape()
    }

    /// Decode and apply one keystroke frame.
    pub fn handle_key(&mut self, frame: &[u8]) -> Result<Step, EditorError> {
        let key = decode(frame)?;
        match interpret(self.mode, key) {
            Some(command) => self.apply(command).map_err(EditorError::from),
            None => Ok(Step::Continue),
        }
    }

    /// Apply one semantic command.
    pub fn apply(&mut self, command: Command) -> Result<Step, PositionError> {
        match command {
            Command::Quit => return Ok(Step::Quit),
            Command::Move(nav) => self.move_cursor(nav)?,
            Command::EnterInsert => self.mode = Mode::Insertion,
            Command::EnterInsertAtLineStart => {
                self.cursor.move_home();
                self.mode = Mode::Insertion;
            }
            Command::LeaveInsert => self.mode = Mode::Navigation,
            Command::DeleteBack => self.delete_back()?,
            Command::Insert(byte) => self.insert(byte)?,
        }
        Ok(Step::Continue)
    }

    /// Scroll the viewport the minimal distance needed to keep the cursor
    /// visible. Call once per keystroke, before rendering.
    pub fn scroll_to_cursor(&mut self) {
        self.viewport.scroll_to(self.cursor.row());
    }

    /// Compose the draw instructions for one redraw.
    pub fn render(&self) -> Vec<DrawOp> {
        compose_frame(&self.buffer, &self.cursor, &self.viewport)
    }

    // Bounds-checked movement. Moves that would leave the document are
    // dropped; an empty buffer leaves row 0 as a no-op sentinel.
    fn move_cursor(&mut self, nav: NavKey) -> Result<(), PositionError> {
        match nav {
            NavKey::Left => {
                if self.cursor.column() > 0 {
                    self.cursor.move_left();
                }
            }
            NavKey::Right => {
                if self.buffer.is_empty() {
                    return Ok(());
                }
                if self.cursor.column() < self.buffer.line_len(self.cursor.row())? {
                    self.cursor.move_right();
                }
            }
            NavKey::Down => {
                if self.cursor.row() + 1 < self.buffer.line_count() {
                    let target_len = self.buffer.line_len(self.cursor.row() + 1)?;
                    self.cursor.move_down(target_len);
                }
            }
            NavKey::Up => {
                if self.cursor.row() > 0 {
                    let target_len = self.buffer.line_len(self.cursor.row() - 1)?;
                    self.cursor.move_up(target_len);
                }
            }
            NavKey::End => {
                if !self.buffer.is_empty() {
                    let line_len = self.buffer.line_len(self.cursor.row())?;
                    self.cursor.move_end(line_len);
                }
            }
            NavKey::Home => self.cursor.move_home(),
        }
        Ok(())
    }

    // The deletion and the paired cursor move are applied together, so the
    // column invariant holds between keystrokes.
    fn delete_back(&mut self) -> Result<(), PositionError> {
        if self.buffer.is_empty() || self.cursor.column() == 0 {
            return Ok(());
        }
        self.buffer
            .delete_char_before(self.cursor.row(), self.cursor.column())?;
        self.cursor.move_left();
        Ok(())
    }

    fn insert(&mut self, byte: u8) -> Result<(), PositionError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.buffer
            .insert_char(self.cursor.row(), self.cursor.column(), byte as char)?;
        self.cursor.move_right();
        Ok(())
    }
}
