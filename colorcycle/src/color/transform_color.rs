// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMode, ColorResult, HexValue, HslValue, RgbValue};

/// The capability set shared by every color representation. Each representation can be
/// converted to every other one, including itself (identity).
pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColorCycleError::HueOutOfRange`] when converting an
    /// [`HslValue`] whose hue is outside `[0, 360)`.
    fn to_rgb(&self) -> ColorResult<RgbValue>;

    /// Returns a [`HexValue`] representation of the `self` color.
    ///
    /// # Errors
    ///
    /// Same as [`TransformColor::to_rgb`].
    fn to_hex(&self) -> ColorResult<HexValue>;

    /// Returns a [`HslValue`] representation of the `self` color.
    fn to_hsl(&self) -> HslValue;

    /// Convert to the representation named by `mode` and render its canonical string.
    /// [`ColorMode::None`] renders as the empty string.
    ///
    /// # Errors
    ///
    /// Same as [`TransformColor::to_rgb`].
    fn render(&self, mode: ColorMode) -> ColorResult<String> {
        Ok(match mode {
            ColorMode::None => String::new(),
            ColorMode::Hsl => self.to_hsl().to_string(),
            ColorMode::Hex => self.to_hex()?.to_string(),
            ColorMode::Rgb => self.to_rgb()?.to_string(),
        })
    }
}
