// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE: &str = "binx_log.txt";

/// Configure where tracing output goes, and at what level.
///
/// A full screen TUI owns stdout, so there is no "display" writer here: logs go to a
/// file or nowhere. Use [`crate::try_initialize_logging_global`] to install it.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File`: [String] is the path of the log file. Eg: `/tmp/binx_log.txt` or
///   `binx_log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl TracingConfig {
    /// Log at `DEBUG` level to `filename` (or [`DEFAULT_LOG_FILE`]).
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// Logging is turned off.
    #[must_use]
    pub fn new_none() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.writer_config != WriterConfig::None }
}

impl Default for TracingConfig {
    fn default() -> Self { Self::new_none() }
}
