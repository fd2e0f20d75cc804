// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure arithmetic that maps a contiguous range of bytes onto a 2-D grid of cells, and
//! back. The grid is filled row by row, `width` bytes per row.

/// Rows at the bottom of the screen that are not part of the byte grid: one status line
/// and one prompt line.
pub const RESERVED_ROWS: u16 = 2;

/// Position of a cell in the grid (or on the screen). Origin is the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

/// Size of the terminal, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

/// Number of bytes that fit in a `width` x `height` viewport.
#[must_use]
pub fn visible_byte_count(width: u16, height: u16) -> usize {
    usize::from(width) * usize::from(height)
}

/// The cell that shows the byte at `index` (relative to the start of the viewport).
///
/// # Panics
///
/// Panics if `width` is 0.
#[must_use]
pub fn cell_for(index: usize, width: u16) -> Pos {
    let width = usize::from(width);
    Pos {
        col: index % width,
        row: index / width,
    }
}

/// Inverse of [`cell_for`].
#[must_use]
pub fn index_for(pos: Pos, width: u16) -> usize { pos.row * usize::from(width) + pos.col }

/// Clamp `start` to `0..=buffer_len`.
#[must_use]
pub fn clamp_start(start: i64, buffer_len: usize) -> i64 {
    let buffer_len = i64::try_from(buffer_len).unwrap_or(i64::MAX);
    start.clamp(0, buffer_len)
}

/// Offset one past the last byte that the viewport can show.
#[must_use]
pub fn viewport_end(start: i64, width: u16, height: u16) -> i64 {
    let count = i64::try_from(visible_byte_count(width, height)).unwrap_or(i64::MAX);
    start.saturating_add(count)
}

/// Height of the byte grid for a terminal that has `rows` rows. Never less than 1.
#[must_use]
pub fn viewport_height_for_rows(rows: u16) -> u16 { rows.saturating_sub(RESERVED_ROWS).max(1) }
