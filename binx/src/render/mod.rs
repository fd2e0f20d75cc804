// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod byte_color;
pub mod crossterm_screen;
pub mod offscreen_screen;
pub mod renderer;
pub mod screen;

// Re-export.
pub use byte_color::*;
pub use crossterm_screen::*;
pub use offscreen_screen::*;
pub use renderer::*;
pub use screen::*;
