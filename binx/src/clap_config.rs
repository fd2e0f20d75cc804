// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{num::NonZeroU16, path::PathBuf};

use clap::{Args, Parser};

use crate::{BinxError, DEFAULT_LOG_FILE, TracingConfig};

/// Bytes per row, unless `--width` says otherwise.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "binx")]
#[command(about = "🔬 Paint the bytes of a file as a grid of colors")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nKeys: ↑/↓ scroll, PgUp/PgDn page, s seek, f find hex pattern, Esc quit.\nUSAGE 📓:\n  binx \x1b[32m--file <PATH>\x1b[0m [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(short = 'f', long = "file", value_name = "PATH", help = "File to view.")]
    pub file_path: PathBuf,

    #[arg(
        short = 'w',
        long = "width",
        value_name = "N",
        default_value_t = DEFAULT_VIEWPORT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Number of bytes shown per row."
    )]
    pub viewport_width: u16,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (see --log-file) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Where to write the log, when logging is enabled."
    )]
    pub log_file: String,
}

/// Everything a session needs to start, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinxConfig {
    pub file_path: PathBuf,
    pub viewport_width: NonZeroU16,
    pub tracing_config: TracingConfig,
}

impl TryFrom<CLIArg> for BinxConfig {
    type Error = BinxError;

    fn try_from(cli_arg: CLIArg) -> Result<Self, Self::Error> {
        let viewport_width =
            NonZeroU16::new(cli_arg.viewport_width).ok_or(BinxError::InvalidViewportWidth)?;

        let tracing_config = if cli_arg.global_options.enable_logging {
            TracingConfig::new_file(Some(cli_arg.global_options.log_file))
        } else {
            TracingConfig::new_none()
        };

        Ok(Self {
            file_path: cli_arg.file_path,
            viewport_width,
            tracing_config,
        })
    }
}
