// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

use super::{CellStyle, Screen, byte_to_color};
use crate::{AppState, ByteBuffer, CommonResult, cell_for, throws, visible_byte_count};

/// Glyph used to paint every byte. Only its color carries information.
pub const BYTE_GLYPH: char = '▒';

/// Background of the bytes that are part of the last search match.
pub const HIGHLIGHT_BG: Color = Color::White;

/// Paint one frame: the byte grid, then the status line, then the prompt line.
///
/// `state` is only read. Cells past the end of the buffer are painted blank so that
/// nothing from the previous frame is left behind.
///
/// # Errors
///
/// Returns an error if writing to `screen` fails.
pub fn render(state: &AppState, buffer: &ByteBuffer, screen: &mut impl Screen) -> CommonResult<()> {
    throws!({
        render_grid(state, buffer, screen)?;

        let status_row = usize::from(state.viewport_height);
        screen.print_line(status_row, &state.to_string(), CellStyle::default())?;
        screen.print_line(status_row + 1, &prompt_line(state), CellStyle::default())?;

        screen.flush()?;
    });
}

fn render_grid(state: &AppState, buffer: &ByteBuffer, screen: &mut impl Screen) -> CommonResult<()> {
    let count = visible_byte_count(state.viewport_width, state.viewport_height);
    // Short (or empty) near the end of the file.
    let bytes = if state.start_byte < 0 {
        &[][..]
    } else {
        buffer.slice(state.start_byte, count)
    };
    for index in 0..count {
        let pos = cell_for(index, state.viewport_width);
        match bytes.get(index) {
            Some(&byte) => {
                let offset = state
                    .start_byte
                    .saturating_add(i64::try_from(index).unwrap_or(i64::MAX));
                let mut style = CellStyle::fg(byte_to_color(byte));
                if state.is_highlighted(offset) {
                    style = style.with_bg(HIGHLIGHT_BG);
                }
                screen.set_cell(pos, BYTE_GLYPH, style)?;
            }
            None => screen.set_cell(pos, ' ', CellStyle::default())?,
        }
    }
    Ok(())
}

/// The prompt and what the user has typed so far, or blank in normal mode.
#[must_use]
pub fn prompt_line(state: &AppState) -> String {
    match state.mode.prompt() {
        Some(prompt) => format!("{prompt}{}", state.user_input),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputMode, OffscreenScreen, Pos, Size, assert_eq2};

    fn screen_for(state: &AppState) -> OffscreenScreen {
        OffscreenScreen::new(Size {
            cols: state.viewport_width,
            rows: state.viewport_height + 2,
        })
    }

    #[test]
    fn test_paints_bytes_with_their_color() {
        let state = AppState::new(4, 2);
        let buffer = ByteBuffer::from(vec![10, 20, 30, 40, 50, 60, 70, 80]);
        let mut screen = screen_for(&state);
        render(&state, &buffer, &mut screen).unwrap();

        let cell = screen.get(Pos { col: 1, row: 1 }).unwrap();
        assert_eq2!(cell.glyph, BYTE_GLYPH);
        assert_eq2!(cell.style, CellStyle::fg(Color::AnsiValue(60)));
        assert_eq2!(screen.flush_count, 1);
    }

    #[test]
    fn test_past_end_of_buffer_is_blank() {
        let mut state = AppState::new(4, 2);
        state.start_byte = 6;
        let buffer = ByteBuffer::from(vec![0_u8; 8]);
        let mut screen = screen_for(&state);
        // Leftovers from a previous frame.
        for row in 0..2 {
            screen.print_line(row, "####", CellStyle::default()).unwrap();
        }
        render(&state, &buffer, &mut screen).unwrap();

        assert_eq2!(screen.line_text(0), "▒▒");
        assert_eq2!(screen.line_text(1), "");
    }

    #[test]
    fn test_start_past_end_does_not_panic() {
        let mut state = AppState::new(4, 2);
        state.start_byte = 1_000_000;
        let buffer = ByteBuffer::from(vec![1_u8, 2, 3]);
        let mut screen = screen_for(&state);
        render(&state, &buffer, &mut screen).unwrap();
        assert_eq2!(screen.line_text(0), "");
    }

    #[test]
    fn test_highlight() {
        let mut state = AppState::new(4, 1);
        state.highlight_pos = Some(1);
        state.highlight_len = 2;
        let buffer = ByteBuffer::from(vec![0_u8, 1, 2, 3]);
        let mut screen = screen_for(&state);
        render(&state, &buffer, &mut screen).unwrap();

        let bg_at = |col| screen.get(Pos { col, row: 0 }).unwrap().style.bg;
        assert_eq2!(bg_at(0), None);
        assert_eq2!(bg_at(1), Some(HIGHLIGHT_BG));
        assert_eq2!(bg_at(2), Some(HIGHLIGHT_BG));
        assert_eq2!(bg_at(3), None);
    }

    #[test]
    fn test_status_and_prompt_lines() {
        let mut state = AppState::new(80, 2);
        state.last_action = "KeyS";
        let buffer = ByteBuffer::from(vec![0_u8; 4]);
        let mut screen = screen_for(&state);

        render(&state, &buffer, &mut screen).unwrap();
        assert_eq2!(
            screen.line_text(2),
            "--0--160--Normal--Last Action: KeyS--Status:"
        );
        assert_eq2!(screen.line_text(3), "");

        state.mode = InputMode::SeekInput;
        state.user_input = "0x1".into();
        render(&state, &buffer, &mut screen).unwrap();
        assert_eq2!(screen.line_text(3), "Seek to offset: 0x1");

        state.mode = InputMode::PatternInput;
        state.user_input = "ff".into();
        render(&state, &buffer, &mut screen).unwrap();
        assert_eq2!(screen.line_text(3), "Find hex pattern: ff");
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let state = AppState::new(4, 2);
        let before = state.clone();
        let mut screen = screen_for(&state);
        render(&state, &ByteBuffer::from(vec![1_u8]), &mut screen).unwrap();
        assert_eq2!(state, before);
    }
}
