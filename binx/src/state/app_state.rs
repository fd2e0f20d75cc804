// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use strum_macros::AsRefStr;

use crate::viewport_end;

/// Which interactive state governs how input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
pub enum InputMode {
    #[default]
    Normal,
    SeekInput,
    PatternInput,
}

impl InputMode {
    /// Text shown in front of the user's input on the prompt line.
    #[must_use]
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            InputMode::Normal => None,
            InputMode::SeekInput => Some("Seek to offset: "),
            InputMode::PatternInput => Some("Find hex pattern: "),
        }
    }
}

/// All the state of a viewing session. There is exactly one of these, it lives in the
/// [`binx_redux::Store`], and only [`crate::AppReducer`] writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: InputMode,
    /// Offset of the first byte in the viewport. Never negative.
    pub start_byte: i64,
    pub viewport_width: u16,
    pub viewport_height: u16,
    /// Only meaningful when `mode` isn't [`InputMode::Normal`].
    pub user_input: String,
    /// Offset of the most recent successful match.
    pub highlight_pos: Option<i64>,
    pub highlight_len: usize,
    pub last_action: &'static str,
    pub status: String,
}

impl AppState {
    /// # Panics
    ///
    /// Debug builds panic if either dimension is 0.
    #[must_use]
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        debug_assert!(viewport_width > 0 && viewport_height > 0);
        Self {
            mode: InputMode::Normal,
            start_byte: 0,
            viewport_width,
            viewport_height,
            user_input: String::new(),
            highlight_pos: None,
            highlight_len: 0,
            last_action: "",
            status: String::new(),
        }
    }

    /// Offset one past the last byte that fits in the viewport.
    #[must_use]
    pub fn end_byte(&self) -> i64 {
        viewport_end(self.start_byte, self.viewport_width, self.viewport_height)
    }

    /// Is `offset` part of the most recent match?
    #[must_use]
    pub fn is_highlighted(&self, offset: i64) -> bool {
        match self.highlight_pos {
            Some(pos) => {
                let len = i64::try_from(self.highlight_len).unwrap_or(i64::MAX);
                offset >= pos && offset < pos.saturating_add(len)
            }
            None => false,
        }
    }

    /// Switch to `mode`, starting with an empty input buffer.
    pub fn enter_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.user_input.clear();
    }
}

impl Display for AppState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "--{}--{}--{}--Last Action: {}--Status: {}",
            self.start_byte,
            self.end_byte(),
            self.mode.as_ref(),
            self.last_action,
            self.status
        )
    }
}
