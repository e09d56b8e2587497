// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB to HSL and HSL to RGB conversion.
//!
//! These are pure functions over channel values. [`ChannelTriplet`] and [`HslValue`]
//! call into them from their [`TransformColor`] implementations.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#From_HSL>
//! - <https://en.wikipedia.org/wiki/HSL_and_HSV#Hue_and_chroma>
//!
//! [`ChannelTriplet`]: super::ChannelTriplet
//! [`TransformColor`]: crate::TransformColor

use super::{HslValue, RgbValue};
use crate::{ColorCycleError, ColorResult};

/// Number of degrees in one full turn of the color wheel.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Width of one hue sextant in degrees.
pub const SEXTANT_DEGREES: f64 = 60.0;

const MAX_CHANNEL: f64 = 255.0;

/// Wrap any finite angle into `[0, 360)`.
///
/// [`f64::rem_euclid`] can round a tiny negative input up to exactly `360.0`, which is
/// folded back to `0.0` here.
#[must_use]
pub fn wrap_hue_degrees(degrees: f64) -> f64 {
    let it = degrees.rem_euclid(FULL_TURN_DEGREES);
    if it >= FULL_TURN_DEGREES { 0.0 } else { it }
}

/// Convert channels to [`HslValue`].
///
/// - Chroma uses integer division, so it is `1` only when the channels span the full
///   byte range (`max - min == 255`) and `0` otherwise.
/// - Saturation is `0` when `1 - |2L - 1|` is zero (pure black or pure white).
/// - The hue is the arc cosine of the normalized dot product. The result of `acos` is
///   in radians and is used as is, then mirrored to `360 - hue` when blue exceeds
///   green. Gray inputs (`r == g == b`) have a zero length vector, and get hue `0`.
#[must_use]
pub fn convert_rgb_into_hsl(red: u8, green: u8, blue: u8) -> HslValue {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let chroma = (u16::from(max) - u16::from(min)) / 255;
    let luminescence = f64::from(u16::from(max) + u16::from(min)) / 510.0;

    let saturation = {
        let denominator = 1.0 - (2.0 * luminescence - 1.0).abs();
        if denominator <= 0.0 {
            0.0
        } else {
            (f64::from(chroma) / denominator).max(0.0)
        }
    };

    let hue = {
        let (r, g, b) = (f64::from(red), f64::from(green), f64::from(blue));
        let numerator = r - g / 2.0 - b / 2.0;
        let denominator = (r * r + g * g + b * b - r * g - r * b - g * b).sqrt();
        let it = if denominator <= 0.0 {
            0.0
        } else {
            (numerator / denominator).clamp(-1.0, 1.0).acos()
        };
        if blue > green { FULL_TURN_DEGREES - it } else { it }
    };

    HslValue::new(hue, saturation, luminescence)
}

/// Convert hue, saturation, and luminescence into [`RgbValue`].
///
/// Each channel is computed as a float, truncated toward zero, and then wrapped into a
/// byte by [`RgbValue::new`].
///
/// # Errors
///
/// Returns [`ColorCycleError::HueOutOfRange`] if `hue` is not in `[0, 360)`. This
/// includes `NaN`.
#[allow(clippy::many_single_char_names)]
pub fn convert_hsl_into_rgb(
    hue: f64,
    saturation: f64,
    luminescence: f64,
) -> ColorResult<RgbValue> {
    if !(0.0..FULL_TURN_DEGREES).contains(&hue) {
        tracing::debug!(message = "Hue out of range", hue = ?hue);
        return Err(ColorCycleError::HueOutOfRange { hue });
    }

    let x = saturation * (1.0 - (2.0 * luminescence - 1.0).abs());
    let y = MAX_CHANNEL * (luminescence - 0.5 * x);
    let z = x * (1.0 - ((hue / SEXTANT_DEGREES).rem_euclid(2.0) - 1.0).abs());

    let x = MAX_CHANNEL * x + y;
    let z = MAX_CHANNEL * z + y;

    let (red, green, blue) = if hue < 60.0 {
        (x, z, y)
    } else if hue < 120.0 {
        (z, x, y)
    } else if hue < 180.0 {
        (y, x, z)
    } else if hue < 240.0 {
        (y, z, x)
    } else if hue < 300.0 {
        (z, y, x)
    } else {
        (x, y, z)
    };

    Ok(RgbValue::new(
        truncate_channel(red),
        truncate_channel(green),
        truncate_channel(blue),
    ))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_channel(value: f64) -> i64 { value.trunc() as i64 }
