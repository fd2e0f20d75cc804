// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

/// Each byte value gets its own entry in the 256 color ANSI palette, so that runs of the
/// same byte show up as bands of the same color.
#[must_use]
pub fn byte_to_color(byte: u8) -> Color { Color::AnsiValue(byte) }
