//! Frame composition: typed draw instructions for one redraw.
//!
//! The engine's rendering contract is the order and parameters of the
//! instructions in a frame, never their byte encodings. The frontend maps
//! each instruction to whatever escape sequences its terminal stack
//! provides, so the frame can be asserted on in tests without a terminal.
//!
//! A frame consists of, in order: a jump to the origin, one text row per
//! visible line (document content, or [`EMPTY_ROW_PLACEHOLDER`] past the
//! end of the document) each followed by clear-to-end-of-line and a line
//! break, the reverse-video status bar, and a final absolute cursor
//! placement.

use crate::buffer::LineBuffer;
use crate::cursor::Cursor;
use crate::mode::CursorShape;
use crate::viewport::Viewport;

/// Glyph shown on rows past the end of the document.
pub const EMPTY_ROW_PLACEHOLDER: &str = "~";

/// Program name shown on the left of the status bar.
pub const STATUS_NAME: &str = "modal";

/// One terminal drawing instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Park the cursor at the top-left corner.
    MoveToOrigin,
    /// Erase the whole screen.
    ClearScreen,
    /// Write literal text at the current position.
    Text(String),
    /// Erase from the current position to the end of the line.
    ClearToLineEnd,
    /// Advance to the start of the next line.
    LineBreak,
    /// Start reverse-video rendering.
    EnterReverseVideo,
    /// Stop reverse-video rendering.
    ExitReverseVideo,
    /// Park the cursor at absolute 1-based terminal coordinates.
    MoveTo {
        /// 1-based terminal row.
        row: usize,
        /// 1-based terminal column.
        col: usize,
    },
    /// Switch the cursor glyph.
    SetCursorShape(CursorShape),
}

/// Compose the instruction list for one redraw.
pub fn compose_frame(buffer: &LineBuffer, cursor: &Cursor, viewport: &Viewport) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(viewport.rows() * 3 + 5);

    ops.push(DrawOp::MoveToOrigin);
    for i in 0..viewport.rows() {
        let text = match buffer.get(viewport.top_line() + i) {
            Some(line) => line.to_string(),
            None => EMPTY_ROW_PLACEHOLDER.to_string(),
        };
        ops.push(DrawOp::Text(text));
        ops.push(DrawOp::ClearToLineEnd);
        ops.push(DrawOp::LineBreak);
    }
    push_status_bar(&mut ops, cursor, viewport);
    ops.push(DrawOp::MoveTo {
        row: cursor.row() - viewport.top_line() + 1,
        col: cursor.column() + 1,
    });

    ops
}

// Name on the left, scroll/size/position on the right, padded so both ends
// exactly fill the terminal width. Padding saturates at zero on terminals
// narrower than the text.
fn push_status_bar(ops: &mut Vec<DrawOp>, cursor: &Cursor, viewport: &Viewport) {
    let position = format!(
        "Offset: {} Rows:{} Cols:{} x:{} y:{}",
        viewport.top_line(),
        viewport.rows(),
        viewport.columns(),
        cursor.column() + 1,
        cursor.row() + 1,
    );
    let padding = viewport
        .columns()
        .saturating_sub(STATUS_NAME.len() + position.len());

    ops.push(DrawOp::EnterReverseVideo);
    ops.push(DrawOp::Text(format!(
        "{STATUS_NAME}{}{position}",
        " ".repeat(padding)
    )));
    ops.push(DrawOp::ExitReverseVideo);
}
