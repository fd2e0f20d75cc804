// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action;
pub mod app_state;
pub mod reducer;
pub mod seek_parser;

// Re-export.
pub use action::*;
pub use app_state::*;
pub use reducer::*;
pub use seek_parser::*;
