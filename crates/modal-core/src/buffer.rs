//! Line buffer: ordered line storage with in-line character edits.
//!
//! The buffer is the sole owner of line content. Other components hold only
//! positional indices (row/column), never references into line storage, so
//! replacing a line on edit cannot invalidate anything they hold.
//!
//! Out-of-range access through the checked accessors signals
//! [`PositionError`] instead of clamping. The input dispatcher validates
//! every position before touching the buffer, so a `PositionError` escaping
//! in normal operation is a defect, not a recoverable condition.

use thiserror::Error;

/// Out-of-range buffer access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("row {row} out of range (buffer has {line_count} lines)")]
    /// Row index past the end of the line sequence.
    InvalidRow {
        /// The requested row.
        row: usize,
        /// Number of lines in the buffer.
        line_count: usize,
    },

    #[error("column {column} out of range (line is {line_len} long)")]
    /// Column past the end of the addressed line.
    InvalidColumn {
        /// The requested column.
        column: usize,
        /// Length of the addressed line.
        line_len: usize,
    },
}

/// Ordered sequence of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create an empty buffer (zero lines).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer over an existing line sequence.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds zero lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line content at `row`, or `None` past the end of the document.
    pub fn get(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Line content at `row`. Out-of-range rows are a contract violation.
    pub fn line(&self, row: usize) -> Result<&str, PositionError> {
        self.get(row).ok_or(PositionError::InvalidRow {
            row,
            line_count: self.lines.len(),
        })
    }

    /// Length of the line at `row`. Out-of-range rows are a contract
    /// violation.
    pub fn line_len(&self, row: usize) -> Result<usize, PositionError> {
        self.line(row).map(str::len)
    }

    /// Insert `ch` at `column` within the line at `row`, shifting the rest
    /// of the line right. `column` may equal the line length (append).
    pub fn insert_char(&mut self, row: usize, column: usize, ch: char) -> Result<(), PositionError> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(PositionError::InvalidRow { row, line_count })?;
        if column > line.len() {
            return Err(PositionError::InvalidColumn {
                column,
                line_len: line.len(),
            });
        }
        line.insert(column, ch);
        Ok(())
    }

    /// Remove the character immediately left of `column` within the line at
    /// `row`. A no-op at column 0: cross-line joining is not implemented.
    pub fn delete_char_before(&mut self, row: usize, column: usize) -> Result<(), PositionError> {
        if column == 0 {
            return Ok(());
        }
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(PositionError::InvalidRow { row, line_count })?;
        if column > line.len() {
            return Err(PositionError::InvalidColumn {
                column,
                line_len: line.len(),
            });
        }
        line.remove(column - 1);
        Ok(())
    }
}
