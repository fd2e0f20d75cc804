// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CellStyle, Screen};
use crate::{CommonResult, Pos, Size, ok};

/// One cell in an [`OffscreenScreen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffscreenCell {
    pub glyph: char,
    pub style: CellStyle,
}

impl Default for OffscreenCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            style: CellStyle::default(),
        }
    }
}

/// In-memory [`Screen`]. Painting writes into a grid of [`OffscreenCell`] that tests can
/// inspect. Writes outside the grid are clipped, the way a real terminal clips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffscreenScreen {
    size: Size,
    buffer: Vec<Vec<OffscreenCell>>,
    pub is_entered: bool,
    pub exit_count: usize,
    pub clear_count: usize,
    pub flush_count: usize,
}

impl OffscreenScreen {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            buffer: Self::blank_buffer(size),
            is_entered: false,
            exit_count: 0,
            clear_count: 0,
            flush_count: 0,
        }
    }

    fn blank_buffer(size: Size) -> Vec<Vec<OffscreenCell>> {
        vec![vec![OffscreenCell::default(); usize::from(size.cols)]; usize::from(size.rows)]
    }

    /// Simulate the user resizing the terminal window. The contents are lost.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.buffer = Self::blank_buffer(size);
    }

    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&OffscreenCell> {
        self.buffer.get(pos.row).and_then(|row| row.get(pos.col))
    }

    /// The glyphs in `row`, with trailing blanks removed.
    #[must_use]
    pub fn line_text(&self, row: usize) -> String {
        self.buffer
            .get(row)
            .map(|cells| cells.iter().map(|cell| cell.glyph).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }
}

impl Screen for OffscreenScreen {
    fn enter(&mut self) -> CommonResult<()> {
        self.is_entered = true;
        self.buffer = Self::blank_buffer(self.size);
        ok!()
    }

    fn exit(&mut self) -> CommonResult<()> {
        self.is_entered = false;
        self.exit_count += 1;
        ok!()
    }

    fn size(&self) -> CommonResult<Size> { ok!(self.size) }

    fn clear(&mut self) -> CommonResult<()> {
        self.clear_count += 1;
        self.buffer = Self::blank_buffer(self.size);
        ok!()
    }

    fn set_cell(&mut self, pos: Pos, glyph: char, style: CellStyle) -> CommonResult<()> {
        if let Some(cell) = self.buffer.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            *cell = OffscreenCell { glyph, style };
        }
        ok!()
    }

    fn print_line(&mut self, row: usize, text: &str, style: CellStyle) -> CommonResult<()> {
        if let Some(cells) = self.buffer.get_mut(row) {
            let mut glyphs = text.chars();
            for cell in cells.iter_mut() {
                *cell = match glyphs.next() {
                    Some(glyph) => OffscreenCell { glyph, style },
                    None => OffscreenCell::default(),
                };
            }
        }
        ok!()
    }

    fn flush(&mut self) -> CommonResult<()> {
        self.flush_count += 1;
        ok!()
    }
}
