// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use smallvec::{SmallVec, smallvec};

use super::ColorMode;
use crate::{ColorCycleError, ColorResult, TransformColor, join_accepted};

/// Storage for the accepted modes. There are only ever three of them.
pub type AcceptedModes = SmallVec<[ColorMode; 3]>;

/// Render any color as a string, chosen by a mode tag.
///
/// This is the single entry point for callers that hold a color without knowing its
/// concrete representation. The set of accepted modes is part of the formatter, so
/// different callers can restrict it without touching global state.
///
/// | Mode tag                  | Result                                      |
/// | :------------------------ | :------------------------------------------ |
/// | `""`                      | empty string (always accepted)              |
/// | `"hsl"`, `"hex"`, `"rgb"` | canonical string, if the mode is accepted   |
/// | anything else             | [`ColorCycleError::InvalidMode`]            |
///
/// ```
/// use colorcycle::{ColorFormatter, RgbValue};
///
/// let formatter = ColorFormatter::default();
/// let red = RgbValue::new(255, 0, 0);
/// assert_eq!(formatter.format(&red, "hex").unwrap(), "ff0000");
/// assert_eq!(formatter.format(&red, "").unwrap(), "");
/// assert!(formatter.format(&red, "bogus").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFormatter {
    accepted_modes: AcceptedModes,
}

impl Default for ColorFormatter {
    fn default() -> Self {
        Self {
            accepted_modes: smallvec![ColorMode::Hsl, ColorMode::Hex, ColorMode::Rgb],
        }
    }
}

impl ColorFormatter {
    /// [`ColorMode::None`] is always accepted, so it is dropped from `modes`. Duplicates
    /// are dropped too.
    #[must_use]
    pub fn new(modes: impl IntoIterator<Item = ColorMode>) -> Self {
        let mut accepted_modes = AcceptedModes::new();
        for mode in modes {
            if mode != ColorMode::None && !accepted_modes.contains(&mode) {
                accepted_modes.push(mode);
            }
        }
        Self { accepted_modes }
    }

    #[must_use]
    pub fn accepted_modes(&self) -> &[ColorMode] { &self.accepted_modes }

    /// Resolve a mode tag against the accepted set.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidMode`] naming the accepted set if `mode` is
    /// neither `""` nor an accepted tag.
    pub fn parse_mode(&self, mode: &str) -> ColorResult<ColorMode> {
        match ColorMode::from_str(mode) {
            Ok(ColorMode::None) => Ok(ColorMode::None),
            Ok(it) if self.accepted_modes.contains(&it) => Ok(it),
            _ => Err(ColorCycleError::InvalidMode {
                mode: mode.to_string(),
                accepted: join_accepted(&self.accepted_modes),
            }),
        }
    }

    /// Convert `color` to the representation named by `mode` and render it.
    ///
    /// # Errors
    ///
    /// - [`ColorCycleError::InvalidMode`] if `mode` is not accepted.
    /// - [`ColorCycleError::HueOutOfRange`] if the conversion needs RGB and the color is
    ///   an HSL value with a hue outside `[0, 360)`.
    pub fn format<C>(&self, color: &C, mode: &str) -> ColorResult<String>
    where
        C: TransformColor + ?Sized,
    {
        let mode = self.parse_mode(mode)?;
        tracing::trace!(message = "Formatting color", mode = %mode.as_ref());
        color.render(mode)
    }
}
