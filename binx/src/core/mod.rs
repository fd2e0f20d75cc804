// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod byte_buffer;
pub mod pattern_search;
pub mod viewport;

// Re-export.
pub use byte_buffer::*;
pub use pattern_search::*;
pub use viewport::*;
