// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configures how a [`miette::Report`] that escapes `main()` is printed to stderr.
//!
//! The [`miette::ErrorHook`] is only invoked when an error is actually displayed, so the
//! terminal width is looked up lazily, just before the report is printed.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Width to use when the terminal size can't be queried (eg: stderr is redirected).
const FALLBACK_TERMINAL_WIDTH: u16 = 80;

pub fn setup_default_miette_global_report_handler() {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(FALLBACK_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}
