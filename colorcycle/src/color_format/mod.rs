// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_formatter;
pub mod color_mode;

// Re-export.
pub use color_formatter::*;
pub use color_mode::*;
