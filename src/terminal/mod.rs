//! Terminal screen control.
//!
//! Emits cursor/visibility escape sequences through crossterm onto any
//! writer. Hiding the cursor hands out a guard that shows it again when
//! dropped, so every exit path (including unwinding) restores the terminal.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType},
};

/// Thin wrapper over escape-sequence output.
#[derive(Debug)]
pub struct TerminalController<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl TerminalController<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalController<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Hide)?;
        self.cursor_hidden = true;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Show)?;
        self.cursor_hidden = false;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All))
    }

    /// Move to the top-left corner without clearing (avoids flicker between frames).
    pub fn home_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))
    }

    /// Write one rendered frame verbatim and flush it.
    pub fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.out.write_all(frame)?;
        self.out.flush()
    }

    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Hide the cursor for the lifetime of the returned guard.
    pub fn hide_cursor_scoped(&mut self) -> io::Result<CursorGuard<'_, W>> {
        self.hide_cursor()?;
        Ok(CursorGuard { term: self })
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

/// Keeps the cursor hidden until dropped.
#[derive(Debug)]
pub struct CursorGuard<'a, W: Write> {
    term: &'a mut TerminalController<W>,
}

impl<W: Write> Deref for CursorGuard<'_, W> {
    type Target = TerminalController<W>;

    fn deref(&self) -> &Self::Target {
        self.term
    }
}

impl<W: Write> DerefMut for CursorGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.term
    }
}

impl<W: Write> Drop for CursorGuard<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.term.show_cursor() {
            tracing::warn!(error = %e, "failed to restore cursor");
        }
    }
}

/// Best-effort cursor restore on stdout for fatal exit paths.
pub fn restore_stdout() {
    let _ = execute!(io::stdout(), Show);
}
