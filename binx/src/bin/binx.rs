// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use binx::{BinxConfig, CLIArg, CommonResult, run_app,
           setup_default_miette_global_report_handler, throws};
use clap::Parser;

#[tokio::main]
async fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler();

        // If no args are passed, clap prints help and exits.
        let cli_arg = CLIArg::parse();
        let config = BinxConfig::try_from(cli_arg)?;

        run_app(config).await?;
    });
}
