//! Modal TUI frontend for the `modal-core` editing engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-modal -- <file_path>
//! ```
//!
//! Diagnostics go to a log file (the terminal belongs to the editor);
//! override the location with `--log-file` and the verbosity with
//! `RUST_LOG`.
//!
//! # Keys
//!
//! - Navigation mode: `h`/`j`/`k`/`l` or arrows to move, Home/End for line
//!   start/end, `i` to insert, `I` to insert at line start
//! - Insertion mode: printable keys insert at the cursor, Backspace deletes,
//!   arrows still move, Escape returns to Navigation mode
//! - Ctrl+Q: quit (either mode)
//!
//! # Responsibilities
//!
//! Everything the engine treats as a collaborator lives here: raw-mode
//! acquisition with guaranteed release, the one-shot window-size query,
//! blocking 1-to-3 byte keystroke reads, translation of the engine's draw
//! instructions into escape sequences, file loading, and CLI parsing. The
//! engine itself never touches the terminal.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use crossterm::cursor::{MoveTo, SetCursorStyle};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use modal_core::{CursorShape, DrawOp, Editor, Step};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A minimal modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "tui-modal")]
#[command(about = "A minimal modal terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE", default_value = "sample.txt")]
    file: PathBuf,

    /// Path to the diagnostics log file (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Scoped raw-mode session.
///
/// Construction enables raw mode and enters the alternate screen; `Drop`
/// restores the terminal on every exit path, normal quit and mid-session
/// failures alike.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort restore; there is nowhere left to report failures.
        let _ = execute!(
            io::stdout(),
            SetCursorStyle::DefaultUserShape,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

fn init_tracing(log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("tui-modal.log"));
    let file = fs::File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

// Translate one frame of engine instructions into escape sequences. The
// instruction order is the engine's contract; this function only encodes.
fn draw_frame(out: &mut impl Write, ops: &[DrawOp]) -> io::Result<()> {
    for op in ops {
        match op {
            DrawOp::MoveToOrigin => queue!(out, MoveTo(0, 0))?,
            DrawOp::ClearScreen => queue!(out, Clear(ClearType::All))?,
            DrawOp::Text(text) => queue!(out, Print(text))?,
            DrawOp::ClearToLineEnd => queue!(out, Clear(ClearType::UntilNewLine))?,
            DrawOp::LineBreak => queue!(out, Print("\r\n"))?,
            DrawOp::EnterReverseVideo => queue!(out, SetAttribute(Attribute::Reverse))?,
            DrawOp::ExitReverseVideo => queue!(out, SetAttribute(Attribute::NoReverse))?,
            DrawOp::MoveTo { row, col } => {
                queue!(out, MoveTo((*col - 1) as u16, (*row - 1) as u16))?
            }
            DrawOp::SetCursorShape(CursorShape::Block) => {
                queue!(out, SetCursorStyle::SteadyBlock)?
            }
            DrawOp::SetCursorShape(CursorShape::Beam) => queue!(out, SetCursorStyle::SteadyBar)?,
        }
    }
    out.flush()
}

// The blocking event loop: scroll, redraw, read one keystroke frame, apply.
// A keystroke's mutation always completes before the redraw that follows
// it, and the next read happens only after the redraw is flushed.
fn run(editor: &mut Editor) -> Result<()> {
    let mut out = io::stdout();
    let mut input = io::stdin().lock();
    let mut shape_on_screen = None;

    loop {
        editor.scroll_to_cursor();
        let mut ops = editor.render();
        let shape = editor.cursor_shape();
        if shape_on_screen != Some(shape) {
            ops.push(DrawOp::SetCursorShape(shape));
            shape_on_screen = Some(shape);
        }
        draw_frame(&mut out, &ops).context("failed to write frame")?;

        let mut frame = [0u8; 3];
        let len = input
            .read(&mut frame)
            .context("failed to read keystroke")?;
        if len == 0 {
            info!("input closed, leaving session");
            return Ok(());
        }

        match editor.handle_key(&frame[..len])? {
            Step::Continue => {}
            Step::Quit => {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file)?;

    // Startup I/O failures exit before raw mode is touched, so there is no
    // terminal state to restore.
    let lines = read_lines(&args.file)?;
    info!(file = %args.file.display(), lines = lines.len(), "opening");

    let guard = TerminalGuard::acquire()?;
    let (columns, rows) = terminal::size().context("failed to query terminal size")?;
    ensure!(rows >= 2, "terminal too small: need at least 2 rows");

    // The bottom row is reserved for the status bar. The size is cached for
    // the whole session; resize is not supported.
    let mut editor = Editor::new(lines, rows as usize - 1, columns as usize);

    let result = run(&mut editor);
    drop(guard);
    result
}
