// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `colorcycle` command line app. The binary is a thin wrapper over
//! [`try_run_command`], which returns the text to print so that it can be tested
//! without spawning a process.
//!
//! ```text
//! $ colorcycle at 14:30 --mode rgb
//! rgb(95, 159, 159)
//! $ colorcycle convert --hex ff8800 --mode hsl
//! hsl(0.6, 1.000, 0.500)
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub const REPORT_FOOTER: &str = "Run `colorcycle --help` for usage.";

// Attach sources.
pub mod clap_config;
pub mod config_folder;
pub mod launcher;

// Re-export.
pub use clap_config::*;
pub use config_folder::*;
pub use launcher::*;
