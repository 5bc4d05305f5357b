//! `AnsiWriter` and `Screen`: Single-syscall ANSI presentation of a frame.

use std::io::Write;

use crate::error::Result;
use crate::render::frame::Frame;
use crate::style::{Modifiers, Rgb};

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct AnsiWriter {
    data: Vec<u8>,
}

impl AnsiWriter {
    /// Create a new writer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a writer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set style modifiers (applied on top of a reset).
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        if modifiers.contains(Modifiers::BOLD) {
            self.data.extend_from_slice(b"\x1b[1m");
        }
        if modifiers.contains(Modifiers::DIM) {
            self.data.extend_from_slice(b"\x1b[2m");
        }
        if modifiers.contains(Modifiers::UNDERLINE) {
            self.data.extend_from_slice(b"\x1b[4m");
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for AnsiWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Presents composed frames on the host terminal.
pub struct Screen {
    writer: AnsiWriter,
}

impl Screen {
    /// Create a screen presenter.
    pub fn new() -> Self {
        Self {
            writer: AnsiWriter::new(),
        }
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn size() -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    /// Write a frame to stdout in one flush.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn present(&mut self, frame: &Frame) -> Result<()> {
        self.render_into_buffer(frame);
        self.writer.flush_to(&mut std::io::stdout())?;
        Ok(())
    }

    fn render_into_buffer(&mut self, frame: &Frame) {
        self.writer.clear();
        self.writer.cursor_hide();
        self.writer.clear_screen();

        let mut style: Option<(Rgb, Rgb, Modifiers)> = None;
        for y in 0..frame.height() {
            self.writer.cursor_move(0, y);
            for cell in frame.row(y) {
                // Continuation columns are covered by the wide grapheme.
                if cell.is_continuation() {
                    continue;
                }
                let next = (cell.fg, cell.bg, cell.modifiers);
                if style != Some(next) {
                    self.writer.reset_attrs();
                    self.writer.set_fg(cell.fg);
                    self.writer.set_bg(cell.bg);
                    self.writer.set_modifiers(cell.modifiers);
                    style = Some(next);
                }
                self.writer.write_str(&cell.symbol);
            }
        }

        self.writer.reset_attrs();
        self.writer.cursor_show();
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
