// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{HexValue, RgbValue, convert::convert_hsl_into_rgb};
use crate::{ColorResult, TransformColor};

/// Hue in degrees, saturation and luminescence as fractions.
///
/// Nothing is validated at construction. A hue outside `[0, 360)` is only reported when
/// the value is converted to RGB or hex (see [`HslValue::to_rgb`]).
///
/// [`HslValue::to_rgb`]: TransformColor::to_rgb
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HslValue {
    pub hue: f64,
    pub saturation: f64,
    pub luminescence: f64,
}

impl HslValue {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, luminescence: f64) -> Self {
        Self {
            hue,
            saturation,
            luminescence,
        }
    }
}

impl From<(f64, f64, f64)> for HslValue {
    fn from((hue, saturation, luminescence): (f64, f64, f64)) -> Self {
        Self::new(hue, saturation, luminescence)
    }
}

/// Renders as `hsl(h, s, l)` with one decimal place for the hue and three for the rest.
impl Display for HslValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "hsl({:.1}, {:.3}, {:.3})",
            self.hue, self.saturation, self.luminescence
        )
    }
}

impl TransformColor for HslValue {
    fn to_rgb(&self) -> ColorResult<RgbValue> {
        convert_hsl_into_rgb(self.hue, self.saturation, self.luminescence)
    }

    fn to_hex(&self) -> ColorResult<HexValue> { Ok(self.to_rgb()?.as_hex()) }

    fn to_hsl(&self) -> HslValue { *self }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{ColorCycleError, assert_eq2};

    #[test]
    fn test_display() {
        let hsl = HslValue::new(180.0, 0.25, 0.5);
        assert_eq2!(hsl.to_string(), "hsl(180.0, 0.250, 0.500)");

        let hsl = HslValue::new(2.0943951, 1.0, 0.5);
        assert_eq2!(hsl.to_string(), "hsl(2.1, 1.000, 0.500)");
    }

    #[test_case(120.0, (0, 255, 0))]
    #[test_case(0.0, (255, 0, 0))]
    #[test_case(240.0, (0, 0, 255))]
    fn test_primary_colors(hue: f64, expected: (u8, u8, u8)) {
        let rgb = HslValue::new(hue, 1.0, 0.5).to_rgb().unwrap();
        assert_eq2!(rgb.channels(), expected);
    }

    #[test]
    fn test_to_hex_routes_through_rgb() {
        let hsl = HslValue::new(0.0, 1.0, 0.5);
        assert_eq2!(hsl.to_hex().unwrap().to_string(), "ff0000");
        assert_eq2!(hsl.to_hex().unwrap(), hsl.to_rgb().unwrap().as_hex());
    }

    #[test]
    fn test_hsl_identity_is_idempotent() {
        let hsl = HslValue::new(42.5, 0.3, 0.7);
        assert_eq2!(hsl.to_hsl(), hsl);
        assert_eq2!(hsl.to_hsl().to_hsl(), hsl.to_hsl());
    }

    #[test_case(360.0)]
    #[test_case(-1.0)]
    #[test_case(f64::NAN)]
    fn test_out_of_range_hue_fails_to_convert(hue: f64) {
        let hsl = HslValue::new(hue, 1.0, 0.5);
        assert!(matches!(
            hsl.to_rgb(),
            Err(ColorCycleError::HueOutOfRange { .. })
        ));
        assert!(matches!(
            hsl.to_hex(),
            Err(ColorCycleError::HueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_construction_is_not_validated() {
        let hsl = HslValue::new(720.0, 2.0, -1.0);
        assert_eq2!(hsl.hue, 720.0);
        assert_eq2!(hsl.saturation, 2.0);
        assert_eq2!(hsl.luminescence, -1.0);
    }
}
