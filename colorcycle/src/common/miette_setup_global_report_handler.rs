// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a [miette](https://docs.rs/miette/latest/miette/index.html) report handler
//! for binaries whose `main()` returns [`crate::CommonResult`].
//!
//! The hook is lazy. It only runs when a [`miette::Report`] is displayed, so the
//! terminal width is only looked up if an error actually reaches the top level.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback width when the `COLUMNS` environment variable is missing or malformed.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// Register the global report handler. `footer` is shown below every report.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = std::env::var("COLUMNS")
                .ok()
                .and_then(|columns| columns.parse::<usize>().ok())
                .unwrap_or(DEFAULT_REPORT_WIDTH);
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
