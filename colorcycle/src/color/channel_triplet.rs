// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared storage for the RGB and hex representations.
//!
//! [`RgbValue`] and [`HexValue`] hold exactly the same numbers. The only difference is
//! the rendering strategy tag, which is a zero sized type parameter:
//!
//! | Alias        | Tag                  | Renders as       |
//! | :----------- | :------------------- | :--------------- |
//! | [`RgbValue`] | [`DecimalRendering`] | `rgb(255, 8, 0)` |
//! | [`HexValue`] | [`HexRendering`]     | `ff0800`         |

use std::{fmt::{Debug, Display, Formatter, Result},
          hash::Hash,
          marker::PhantomData,
          str::FromStr};

use super::{HslValue, convert::convert_rgb_into_hsl, hex_color_parser::parse_hex_color};
use crate::{ColorCycleError, ColorResult, TransformColor};

/// Only the low 8 bits of each channel input are kept.
pub const CHANNEL_MASK: i64 = 0xff;

/// How a [`ChannelTriplet`] renders itself with [`Display`].
pub trait ChannelRendering: Copy + Default + Debug + PartialEq + Eq + Hash {
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn render(red: u8, green: u8, blue: u8, f: &mut Formatter<'_>) -> Result;
}

/// Tag for `rgb(R, G, B)` rendering with decimal channels.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct DecimalRendering;

/// Tag for `rrggbb` rendering, lowercase and zero-padded per channel.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct HexRendering;

impl ChannelRendering for DecimalRendering {
    fn render(red: u8, green: u8, blue: u8, f: &mut Formatter<'_>) -> Result {
        write!(f, "rgb({red}, {green}, {blue})")
    }
}

impl ChannelRendering for HexRendering {
    fn render(red: u8, green: u8, blue: u8, f: &mut Formatter<'_>) -> Result {
        write!(f, "{red:02x}{green:02x}{blue:02x}")
    }
}

/// Three channels, each in `[0, 255]`. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChannelTriplet<R: ChannelRendering> {
    red: u8,
    green: u8,
    blue: u8,
    _rendering: PhantomData<R>,
}

/// Channels rendered as `rgb(R, G, B)`.
pub type RgbValue = ChannelTriplet<DecimalRendering>;

/// Channels rendered as `rrggbb`.
pub type HexValue = ChannelTriplet<HexRendering>;

impl<R: ChannelRendering> ChannelTriplet<R> {
    /// Each input keeps only its low 8 bits, so out of range values wrap around instead
    /// of being clamped or rejected: `256 -> 0`, `-1 -> 255`, `300 -> 44`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(red: i64, green: i64, blue: i64) -> Self {
        Self::from_u8(
            (red & CHANNEL_MASK) as u8,
            (green & CHANNEL_MASK) as u8,
            (blue & CHANNEL_MASK) as u8,
        )
    }

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            _rendering: PhantomData,
        }
    }

    #[must_use]
    pub const fn red(&self) -> u8 { self.red }

    #[must_use]
    pub const fn green(&self) -> u8 { self.green }

    #[must_use]
    pub const fn blue(&self) -> u8 { self.blue }

    /// The channels as a `(red, green, blue)` tuple.
    #[must_use]
    pub const fn channels(&self) -> (u8, u8, u8) { (self.red, self.green, self.blue) }

    /// Same channels, decimal rendering. Lossless.
    #[must_use]
    pub const fn as_rgb(&self) -> RgbValue {
        ChannelTriplet::from_u8(self.red, self.green, self.blue)
    }

    /// Same channels, hex rendering. Lossless.
    #[must_use]
    pub const fn as_hex(&self) -> HexValue {
        ChannelTriplet::from_u8(self.red, self.green, self.blue)
    }
}

impl<R: ChannelRendering> Default for ChannelTriplet<R> {
    fn default() -> Self { Self::from_u8(0, 0, 0) }
}

impl<R: ChannelRendering> From<(u8, u8, u8)> for ChannelTriplet<R> {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl<R: ChannelRendering> From<ChannelTriplet<R>> for (u8, u8, u8) {
    fn from(value: ChannelTriplet<R>) -> Self { value.channels() }
}

impl<R: ChannelRendering> Display for ChannelTriplet<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        R::render(self.red, self.green, self.blue, f)
    }
}

impl<R: ChannelRendering> TransformColor for ChannelTriplet<R> {
    fn to_rgb(&self) -> ColorResult<RgbValue> { Ok(self.as_rgb()) }

    fn to_hex(&self) -> ColorResult<HexValue> { Ok(self.as_hex()) }

    fn to_hsl(&self) -> HslValue { convert_rgb_into_hsl(self.red, self.green, self.blue) }
}

impl HexValue {
    /// Parse `rrggbb` or `#rrggbb`. Digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidHexColor`] if the input is not exactly 6 hex
    /// digits with an optional leading `#`.
    pub fn try_from_hex_str(input: &str) -> ColorResult<HexValue> {
        match parse_hex_color(input) {
            Ok((_, (red, green, blue))) => Ok(HexValue::from_u8(red, green, blue)),
            Err(_) => Err(ColorCycleError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }
}

impl FromStr for HexValue {
    type Err = ColorCycleError;

    fn from_str(input: &str) -> ColorResult<Self> { Self::try_from_hex_str(input) }
}
