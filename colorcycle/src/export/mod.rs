// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod export_target;

// Re-export.
pub use export_target::*;
