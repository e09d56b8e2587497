// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in structured logging with [`tracing`]. Logging is off unless a binary calls
//! [`try_initialize_logging_global`] with an enabled [`TracingConfig`].

// Attach sources.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
