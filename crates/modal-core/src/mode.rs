//! Modal input state.
//!
//! Exactly one mode is active at any time; there are no nested or stacked
//! modes. A transition happens synchronously with the key event that caused
//! it, and its only side effect outside the dispatcher is the cursor glyph
//! the terminal should show.

/// Input mode gating how keystrokes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys are movement and mode-change commands, not literal text.
    #[default]
    Navigation,
    /// Most keys insert literal text; navigation keys and Escape stay
    /// special.
    Insertion,
}

/// On-screen cursor glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Full-cell block, shown while navigating.
    Block,
    /// Thin vertical beam, shown while inserting.
    Beam,
}

impl Mode {
    /// Glyph the terminal should show while this mode is active.
    pub fn cursor_shape(&self) -> CursorShape {
        match self {
            Mode::Navigation => CursorShape::Block,
            Mode::Insertion => CursorShape::Beam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_navigation() {
        assert_eq!(Mode::default(), Mode::Navigation);
    }

    #[test]
    fn test_cursor_shapes() {
        assert_eq!(Mode::Navigation.cursor_shape(), CursorShape::Block);
        assert_eq!(Mode::Insertion.cursor_shape(), CursorShape::Beam);
    }
}
