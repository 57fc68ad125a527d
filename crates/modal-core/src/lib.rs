#![warn(missing_docs)]
//! Modal Core - Headless Modal Editing Engine
//!
//! # Overview
//!
//! `modal-core` is the editing engine of a terminal-resident, modal,
//! line-oriented text editor. It owns every piece of state a keystroke can
//! change and every decision about what the next frame shows, but performs
//! no I/O of its own: the frontend feeds it raw keystroke frames and writes
//! out the typed draw instructions it emits.
//!
//! # Core Features
//!
//! - **Column-Snapping Cursor**: vertical movement through short lines
//!   remembers and restores the chosen column
//! - **Line Buffer**: sole owner of line content; in-place character
//!   insertion and deletion with contract-checked positions
//! - **Modal Input**: two modes (Navigation, Insertion) gating key
//!   interpretation, with a global quit chord
//! - **Scroll-Follows-Cursor Viewport**: minimal-jump scrolling that keeps
//!   the cursor inside the visible band
//! - **Headless Rendering**: frames are ordered [`DrawOp`] instruction
//!   lists, assertable in tests without a terminal
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor (modal dispatch + session steps)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Frame Composition (DrawOp sequences)       │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Commands (per-mode key interpretation)     │  ← Semantics
//! ├─────────────────────────────────────────────┤
//! │  Input Decoding (1-to-3 byte key frames)    │  ← Wire Protocol
//! ├─────────────────────────────────────────────┤
//! │  Cursor / LineBuffer / Viewport             │  ← State
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use modal_core::{Editor, Step};
//!
//! let lines = vec!["fn main() {".to_string(), "}".to_string()];
//! let mut editor = Editor::new(lines, 24, 80);
//!
//! // `l` moves right in Navigation mode.
//! assert_eq!(editor.handle_key(b"l").unwrap(), Step::Continue);
//! assert_eq!(editor.cursor().column(), 1);
//!
//! // `i` enters Insertion mode; typed bytes land in the buffer.
//! editor.handle_key(b"i").unwrap();
//! editor.handle_key(b"x").unwrap();
//! assert_eq!(editor.buffer().line(0).unwrap(), "fxn main() {");
//!
//! // Ctrl+Q terminates the session from either mode.
//! assert_eq!(editor.handle_key(&[17]).unwrap(), Step::Quit);
//! ```
//!
//! # Module Description
//!
//! - [`cursor`] - cursor position with preferred-column memory
//! - [`buffer`] - ordered line storage and in-line edits
//! - [`mode`] - the two-state modal machine
//! - [`input`] - raw keystroke frame decoding
//! - [`commands`] - semantic command vocabulary and per-mode dispatch
//! - [`viewport`] - scroll-follows-cursor window
//! - [`render`] - frame composition into draw instructions
//! - [`editor`] - the engine facade tying the above together

pub mod buffer;
pub mod commands;
pub mod cursor;
pub mod editor;
pub mod input;
pub mod mode;
pub mod render;
pub mod viewport;

pub use buffer::{LineBuffer, PositionError};
pub use commands::{Command, interpret};
pub use cursor::Cursor;
pub use editor::{Editor, EditorError, Step};
pub use input::{DecodeError, Key, NavKey, decode};
pub use mode::{CursorShape, Mode};
pub use render::{DrawOp, EMPTY_ROW_PLACEHOLDER, STATUS_NAME, compose_frame};
pub use viewport::Viewport;
