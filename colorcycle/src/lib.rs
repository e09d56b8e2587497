// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colorcycle
//!
//! Convert colors between three co-equal representations and derive a color from the
//! time of day.
//!
//! - [`RgbValue`] and [`HexValue`] share one storage type, [`ChannelTriplet`], and
//!   differ only in how they render (`rgb(255, 0, 0)` vs `ff0000`).
//! - [`HslValue`] holds hue, saturation, and luminescence as `f64`.
//! - [`ColorValue`] is the tagged union of all three. Every representation implements
//!   [`TransformColor`], so any value can be converted to any other, including itself.
//! - [`ClockTime`] maps the minutes and seconds of a wall clock reading onto a hue
//!   angle, and then onto an [`HslValue`] using a [`CycleConfig`].
//! - [`ColorFormatter`] is the single entry point to get a display string for a color
//!   given a mode tag (`""`, `"hsl"`, `"hex"`, `"rgb"`).
//!
//! ```
//! use colorcycle::{ClockTime, CycleConfig, TransformColor};
//!
//! let time = ClockTime::new(14, 30, 0);
//! let hsl = time.to_hsl(&CycleConfig::default()).unwrap();
//! let hex = hsl.to_hex().unwrap();
//! assert_eq!(hex.to_string().len(), 6);
//! ```
//!
//! Data flow: `ClockTime -> hue -> HslValue -> RgbValue -> (HexValue | String)`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod clock;
pub mod color;
pub mod color_format;
pub mod common;
pub mod config;
pub mod decl_macros;
pub mod export;
pub mod log;

// Re-export.
pub use clock::*;
pub use color::*;
pub use color_format::*;
pub use common::*;
pub use config::*;
pub use export::*;
pub use log::*;
