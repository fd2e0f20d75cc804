// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # binx
//!
//! Interactive terminal viewer that paints each byte of a file as one colored cell. Byte
//! value `b` is painted with entry `b` of the 256 color ANSI palette, so structure in the
//! file (runs of zeros, text, tables) shows up as bands and patterns of color.
//!
//! ```text
//! binx --file /bin/ls --width 64
//! ```
//!
//! | Key          | Normal mode                  | Prompt mode           |
//! | ------------ | ---------------------------- | --------------------- |
//! | `↓` / `↑`    | scroll one row               |                       |
//! | `PgDn`/`PgUp`| scroll one screen            |                       |
//! | `s`          | open the "Seek to offset" prompt | typed             |
//! | `f`          | open the "Find hex pattern" prompt | typed           |
//! | `Enter`      |                              | seek / search         |
//! | `Backspace`  |                              | delete last char      |
//! | `Esc`        | quit                         | back to normal mode   |
//!
//! Offsets can be typed in decimal, hex (`0x1f`), octal (`017`, `0o17`) or binary
//! (`0b101`). Search patterns are hex strings (eg: `deadbeef`), and the first match is
//! highlighted.
//!
//! # Architecture
//!
//! The state lives in a [`binx_redux::Store`]. An input task turns terminal events into
//! [`Action`]s via [`translate`] and sends them down a bounded channel. The main event
//! loop ([`run_main_event_loop`]) takes them off one at a time, runs [`AppReducer`] and
//! then [`render`]s the new [`AppState`] onto a [`Screen`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod common;
pub mod core;
pub mod event_loop;
pub mod input;
pub mod launcher;
pub mod log;
pub mod render;
pub mod state;

// Re-export.
pub use clap_config::*;
pub use common::*;
pub use core::*;
pub use event_loop::*;
pub use input::*;
pub use launcher::*;
pub use log::*;
pub use render::*;
pub use state::*;
