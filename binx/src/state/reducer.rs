// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use binx_redux::{Continuation, Reducer};

use super::{Action, AppState, InputMode, parse_seek_offset};
use crate::{ByteBuffer, find_match, viewport_height_for_rows, visible_byte_count};

/// The only code that mutates [`AppState`]. Each action is a transition of a small state
/// machine whose states are the [`InputMode`] variants:
///
/// ```text
///             KeyS                 Commit (ok) / Escape
///   Normal ─────────▶ SeekInput ──────────────────────▶ Normal
///   Normal ─────────▶ PatternInput ───────────────────▶ Normal
///             KeyF                 Commit (any) / Escape
/// ```
///
/// Failures to parse an offset or find a pattern are reported in [`AppState::status`]
/// and never end the session. The only way out is [`Action::Escape`] in
/// [`InputMode::Normal`], which returns [`Continuation::Exit`].
#[derive(Debug, Clone)]
pub struct AppReducer {
    buffer: ByteBuffer,
}

impl AppReducer {
    #[must_use]
    pub fn new(buffer: ByteBuffer) -> Self { Self { buffer } }
}

impl Reducer<AppState, Action> for AppReducer {
    fn run(&self, action: Action, state: &mut AppState) -> Continuation {
        state.last_action = action.name();
        tracing::debug!(?action, mode = state.mode.as_ref(), "reduce action");

        if let Action::Resize { cols, rows } = action {
            resize(state, cols, rows);
            return Continuation::Continue;
        }

        match state.mode {
            InputMode::Normal => reduce_normal(action, state),
            InputMode::SeekInput => {
                reduce_seek_input(action, state);
                Continuation::Continue
            }
            InputMode::PatternInput => {
                reduce_pattern_input(&self.buffer, action, state);
                Continuation::Continue
            }
        }
    }
}

fn resize(state: &mut AppState, cols: u16, rows: u16) {
    state.viewport_height = viewport_height_for_rows(rows);
    tracing::info!(
        cols,
        rows,
        viewport_height = state.viewport_height,
        "terminal resized"
    );
}

fn reduce_normal(action: Action, state: &mut AppState) -> Continuation {
    match action {
        Action::Escape => {
            tracing::info!("exit requested");
            return Continuation::Exit;
        }
        Action::KeyS(_) => switch_mode(state, InputMode::SeekInput),
        Action::KeyF(_) => switch_mode(state, InputMode::PatternInput),
        Action::ScrollDown => scroll_by(state, i64::from(state.viewport_width)),
        Action::ScrollUp => scroll_by(state, -i64::from(state.viewport_width)),
        Action::PageDown => scroll_by(state, page_len(state)),
        Action::PageUp => scroll_by(state, page_len(state).saturating_neg()),
        Action::OtherKey(_)
        | Action::Commit
        | Action::Backspace
        | Action::Noop
        | Action::Resize { .. } => {}
    }
    Continuation::Continue
}

fn reduce_seek_input(action: Action, state: &mut AppState) {
    if edit_user_input(action, state) {
        return;
    }
    if action == Action::Commit {
        match parse_seek_offset(&state.user_input) {
            Ok(offset) => {
                tracing::info!(offset, "seek");
                state.start_byte = offset;
                state.status = format!("seek to {offset}");
                switch_mode(state, InputMode::Normal);
            }
            Err(err) => {
                tracing::info!(input = %state.user_input, %err, "seek rejected");
                state.status = err.to_string();
            }
        }
    }
}

fn reduce_pattern_input(buffer: &ByteBuffer, action: Action, state: &mut AppState) {
    if edit_user_input(action, state) {
        return;
    }
    if action == Action::Commit {
        let result = find_match(&state.user_input, buffer);
        match result {
            Ok(found) => {
                tracing::info!(pattern = %state.user_input, offset = found.offset, "pattern found");
                state.highlight_pos = Some(i64::try_from(found.offset).unwrap_or(i64::MAX));
                state.highlight_len = found.len;
                state.status = format!("found at {}", found.offset);
            }
            Err(err) => {
                tracing::info!(pattern = %state.user_input, %err, "search failed");
                state.status = err.to_string();
            }
        }
        switch_mode(state, InputMode::Normal);
    }
}

/// Handle the actions that are common to both input modes. Returns `true` if `action`
/// was consumed.
fn edit_user_input(action: Action, state: &mut AppState) -> bool {
    if let Some(ch) = action.typed_char() {
        state.user_input.push(ch);
        return true;
    }
    match action {
        Action::Backspace => {
            state.user_input.pop();
            true
        }
        Action::Escape => {
            switch_mode(state, InputMode::Normal);
            true
        }
        _ => false,
    }
}

fn switch_mode(state: &mut AppState, mode: InputMode) {
    tracing::info!(from = state.mode.as_ref(), to = mode.as_ref(), "mode change");
    state.enter_mode(mode);
}

fn scroll_by(state: &mut AppState, delta: i64) {
    state.start_byte = state.start_byte.saturating_add(delta).max(0);
}

fn page_len(state: &AppState) -> i64 {
    i64::try_from(visible_byte_count(state.viewport_width, state.viewport_height))
        .unwrap_or(i64::MAX)
}
