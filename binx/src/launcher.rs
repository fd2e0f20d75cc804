// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BinxConfig, ByteBuffer, CommonResult, CrosstermScreen, InputDevice,
            run_main_event_loop, throws, try_initialize_logging_global};

/// Run a viewing session on the real terminal.
///
/// # Errors
///
/// Returns an error if logging can't be set up, the file can't be read, or the terminal
/// fails.
pub async fn run_app(config: BinxConfig) -> CommonResult<()> {
    throws!({
        try_initialize_logging_global(config.tracing_config.clone())?;
        tracing::info!(?config, "binx -> Start 🚀");

        let buffer = ByteBuffer::try_load(&config.file_path).await?;

        let mut screen = CrosstermScreen::new_stdout();
        let final_state = run_main_event_loop(
            config.viewport_width.get(),
            buffer,
            InputDevice::new_event_stream(),
            &mut screen,
        )
        .await?;

        tracing::info!(state = ?final_state, "binx -> Stop 🛑");
    });
}
