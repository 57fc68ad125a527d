//! Cursor position tracking with preferred-column memory.
//!
//! The cursor stores logical (column, row) coordinates plus the last
//! deliberately chosen column. Vertical movement reconciles the column
//! against the destination line's length: a shorter line clamps the column
//! without forgetting it, so moving back through a long line restores the
//! original horizontal position.
//!
//! The cursor performs no document lookups. Callers bounds-check every move
//! against the buffer before invoking it; see [`crate::editor::Editor`].

/// Editing cursor: logical column/row plus preferred-column memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    column: usize,
    row: usize,
    preferred_column: usize,
}

impl Cursor {
    /// Create a cursor at the origin (column 0, row 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current column (0-based, within the line at [`Cursor::row`]).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Current row (0-based document line index).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column that vertical movement restores when the destination line is
    /// long enough.
    pub fn preferred_column(&self) -> usize {
        self.preferred_column
    }

    /// Move one column left. Caller has verified `column > 0`.
    pub fn move_left(&mut self) {
        self.column -= 1;
        self.preferred_column = self.column;
    }

    /// Move one column right. Caller has verified `column` is below the
    /// current line's length.
    pub fn move_right(&mut self) {
        self.column += 1;
        self.preferred_column = self.column;
    }

    /// Move one row up, then reconcile the column against the destination
    /// line's length. Caller has verified `row > 0`.
    pub fn move_up(&mut self, target_len: usize) {
        self.row -= 1;
        self.reconcile_column(target_len);
    }

    /// Move one row down, then reconcile the column against the destination
    /// line's length. Caller has verified a line exists below.
    pub fn move_down(&mut self, target_len: usize) {
        self.row += 1;
        self.reconcile_column(target_len);
    }

    /// Jump to the start of the current line.
    pub fn move_home(&mut self) {
        self.column = 0;
        self.preferred_column = 0;
    }

    /// Jump past the last character of the current line.
    pub fn move_end(&mut self, line_len: usize) {
        self.column = line_len;
        self.preferred_column = line_len;
    }

    // Clamp to the destination line without updating the preferred column;
    // restore the preferred column when the line is long enough.
    fn reconcile_column(&mut self, target_len: usize) {
        if self.preferred_column > target_len {
            self.column = target_len;
        } else {
            self.column = self.preferred_column;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_at_origin() {
        let cursor = Cursor::new();
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.preferred_column(), 0);
    }

    #[test]
    fn test_left_then_right_restores_column() {
        let mut cursor = Cursor::new();
        cursor.move_right();
        cursor.move_right();
        cursor.move_right();

        cursor.move_left();
        cursor.move_right();
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.preferred_column(), 3);
    }

    #[test]
    fn test_horizontal_moves_update_preferred_column() {
        let mut cursor = Cursor::new();
        cursor.move_right();
        assert_eq!(cursor.preferred_column(), 1);

        cursor.move_left();
        assert_eq!(cursor.preferred_column(), 0);
    }

    #[test]
    fn test_vertical_clamp_keeps_preferred_column() {
        let mut cursor = Cursor::new();
        cursor.move_end(7); // column 7 on a long line

        // Down to a 3-character line: clamp, but remember 7.
        cursor.move_down(3);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.preferred_column(), 7);

        // Back up to the long line: the remembered column returns.
        cursor.move_up(10);
        assert_eq!(cursor.row(), 0);
        assert_eq!(cursor.column(), 7);
    }

    #[test]
    fn test_vertical_move_restores_exact_preferred_column() {
        let mut cursor = Cursor::new();
        cursor.move_end(5);
        cursor.move_down(5);
        assert_eq!(cursor.column(), 5); // destination exactly fits

        cursor.move_down(9);
        assert_eq!(cursor.column(), 5); // longer line still restores 5
    }

    #[test]
    fn test_home_resets_preferred_column() {
        let mut cursor = Cursor::new();
        cursor.move_end(8);
        cursor.move_home();
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.preferred_column(), 0);

        // A later vertical move must not resurrect the old column.
        cursor.move_down(8);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_end_sets_column_and_preferred_column() {
        let mut cursor = Cursor::new();
        cursor.move_home();
        cursor.move_end(6);
        assert_eq!(cursor.column(), 6);
        assert_eq!(cursor.preferred_column(), 6);
    }
}
