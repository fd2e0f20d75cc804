// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

use crate::{CommonResult, Pos, Size};

/// Colors for one cell, or one line of text. `None` means the terminal's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellStyle {
    #[must_use]
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    #[must_use]
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

/// The capability that the renderer paints through. Output is queued until
/// [`Screen::flush`] is called.
///
/// - [`crate::CrosstermScreen`] is the real terminal.
/// - [`crate::OffscreenScreen`] is an in-memory grid used in tests.
pub trait Screen {
    /// Take over the terminal: raw mode, alternate screen, cursor hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put into raw mode.
    fn enter(&mut self) -> CommonResult<()>;

    /// Give the terminal back, undoing [`Screen::enter`]. Safe to call even if
    /// [`Screen::enter`] failed part way.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn exit(&mut self) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if the size of the terminal can't be queried.
    fn size(&self) -> CommonResult<Size>;

    /// Blank the whole screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn clear(&mut self) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn set_cell(&mut self, pos: Pos, glyph: char, style: CellStyle) -> CommonResult<()>;

    /// Paint `text` at the start of `row`, truncated to the screen width. The rest of the
    /// row is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn print_line(&mut self, row: usize, text: &str, style: CellStyle) -> CommonResult<()>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn flush(&mut self) -> CommonResult<()>;
}
