// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Stdout, Write};

use crossterm::{cursor::{Hide, MoveTo, Show},
                queue,
                style::{Colors, Print, ResetColor, SetColors},
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};

use super::{CellStyle, Screen};
use crate::{BinxError, CommonResult, Pos, Size, ok};

/// [`Screen`] backed by crossterm. Everything is queued into `writer` and only written
/// out on [`Screen::flush`].
///
/// A mock (see [`CrosstermScreen::new_mock`]) writes the same escape sequences, but
/// doesn't touch raw mode and reports a fixed size.
#[allow(missing_debug_implementations)]
pub struct CrosstermScreen<W: Write = Stdout> {
    writer: W,
    mock_size: Option<Size>,
}

impl CrosstermScreen<Stdout> {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            writer: std::io::stdout(),
            mock_size: None,
        }
    }
}

impl<W: Write> CrosstermScreen<W> {
    #[must_use]
    pub fn new_mock(writer: W, size: Size) -> Self {
        Self {
            writer,
            mock_size: Some(size),
        }
    }

    #[must_use]
    pub fn writer(&self) -> &W { &self.writer }

    fn is_mock(&self) -> bool { self.mock_size.is_some() }
}

fn to_colors(style: CellStyle) -> Colors {
    Colors {
        foreground: style.fg,
        background: style.bg,
    }
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

impl<W: Write> Screen for CrosstermScreen<W> {
    fn enter(&mut self) -> CommonResult<()> {
        if !self.is_mock() {
            terminal::enable_raw_mode().map_err(BinxError::TerminalInit)?;
        }
        queue!(
            self.writer,
            EnterAlternateScreen,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Hide
        )
        .map_err(BinxError::TerminalInit)?;
        self.writer.flush().map_err(BinxError::TerminalInit)?;
        tracing::debug!(is_mock = self.is_mock(), "terminal entered raw mode");
        ok!()
    }

    fn exit(&mut self) -> CommonResult<()> {
        queue!(self.writer, ResetColor, Show, LeaveAlternateScreen)
            .map_err(BinxError::terminal_io("exit"))?;
        self.writer.flush().map_err(BinxError::terminal_io("exit"))?;
        if !self.is_mock() {
            terminal::disable_raw_mode().map_err(BinxError::terminal_io("exit"))?;
        }
        tracing::debug!(is_mock = self.is_mock(), "terminal restored");
        ok!()
    }

    fn size(&self) -> CommonResult<Size> {
        if let Some(size) = self.mock_size {
            return ok!(size);
        }
        let (cols, rows) = terminal::size().map_err(BinxError::terminal_io("size"))?;
        ok!(Size { cols, rows })
    }

    fn clear(&mut self) -> CommonResult<()> {
        queue!(self.writer, ResetColor, Clear(ClearType::All))
            .map_err(BinxError::terminal_io("clear"))?;
        ok!()
    }

    fn set_cell(&mut self, pos: Pos, glyph: char, style: CellStyle) -> CommonResult<()> {
        // The terminal would pin the cursor to its last column or row, so drop the cell.
        let size = self.size()?;
        if pos.col >= usize::from(size.cols) || pos.row >= usize::from(size.rows) {
            return ok!();
        }
        queue!(
            self.writer,
            MoveTo(to_u16(pos.col), to_u16(pos.row)),
            ResetColor,
            SetColors(to_colors(style)),
            Print(glyph)
        )
        .map_err(BinxError::terminal_io("set_cell"))?;
        ok!()
    }

    fn print_line(&mut self, row: usize, text: &str, style: CellStyle) -> CommonResult<()> {
        let max_cols = usize::from(self.size()?.cols);
        let truncated: String = text.chars().take(max_cols).collect();
        queue!(
            self.writer,
            MoveTo(0, to_u16(row)),
            ResetColor,
            SetColors(to_colors(style)),
            Print(truncated),
            ResetColor,
            Clear(ClearType::UntilNewLine)
        )
        .map_err(BinxError::terminal_io("print_line"))?;
        ok!()
    }

    fn flush(&mut self) -> CommonResult<()> {
        self.writer.flush().map_err(BinxError::terminal_io("flush"))?;
        ok!()
    }
}
