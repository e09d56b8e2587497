// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use colorcycle::{CommonResult, setup_default_miette_global_report_handler, throws,
                 try_initialize_logging_global};
use colorcycle_cmdr::{CLIArg, REPORT_FOOTER, try_run_command};

fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(REPORT_FOOTER);

        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        let output = try_run_command(&cli_arg)?;
        println!("{output}");

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
