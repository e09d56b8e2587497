// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Storage**: [`ChannelTriplet`], aliased as [`RgbValue`] and [`HexValue`], plus
//!   [`HslValue`]
//! - **Abstraction**: [`TransformColor`] trait for representation conversion
//! - **Sum type**: [`ColorValue`] for handling a color without knowing its
//!   representation
//! - **Conversion logic**: RGB <-> HSL algorithms in [`convert`]

// Attach.
mod channel_triplet;
mod color_value;
pub mod convert;
mod hex_color_parser;
mod hsl_value;
mod transform_color;

// Re-export.
pub use channel_triplet::*;
pub use color_value::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use hsl_value::*;
pub use transform_color::*;
