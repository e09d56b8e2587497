// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clock_time;

// Re-export.
pub use clock_time::*;
