// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{HexValue, HslValue, RgbValue};
use crate::{ColorMode, ColorResult, TransformColor};

/// One color, held in any of its three co-equal representations.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ColorValue {
    Rgb(RgbValue),
    Hex(HexValue),
    Hsl(HslValue),
}

impl ColorValue {
    /// The mode that renders this value in its own representation.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        match self {
            ColorValue::Rgb(_) => ColorMode::Rgb,
            ColorValue::Hex(_) => ColorMode::Hex,
            ColorValue::Hsl(_) => ColorMode::Hsl,
        }
    }
}

mod color_value_impl {
    use super::{ColorResult, ColorValue, Display, Formatter, HexValue, HslValue, Result,
                RgbValue, TransformColor};

    impl TransformColor for ColorValue {
        fn to_rgb(&self) -> ColorResult<RgbValue> {
            match self {
                ColorValue::Rgb(it) => it.to_rgb(),
                ColorValue::Hex(it) => it.to_rgb(),
                ColorValue::Hsl(it) => it.to_rgb(),
            }
        }

        fn to_hex(&self) -> ColorResult<HexValue> {
            match self {
                ColorValue::Rgb(it) => it.to_hex(),
                ColorValue::Hex(it) => it.to_hex(),
                ColorValue::Hsl(it) => it.to_hex(),
            }
        }

        fn to_hsl(&self) -> HslValue {
            match self {
                ColorValue::Rgb(it) => it.to_hsl(),
                ColorValue::Hex(it) => it.to_hsl(),
                ColorValue::Hsl(it) => it.to_hsl(),
            }
        }
    }

    impl Display for ColorValue {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                ColorValue::Rgb(it) => write!(f, "{it}"),
                ColorValue::Hex(it) => write!(f, "{it}"),
                ColorValue::Hsl(it) => write!(f, "{it}"),
            }
        }
    }

    impl From<RgbValue> for ColorValue {
        fn from(value: RgbValue) -> Self { ColorValue::Rgb(value) }
    }

    impl From<HexValue> for ColorValue {
        fn from(value: HexValue) -> Self { ColorValue::Hex(value) }
    }

    impl From<HslValue> for ColorValue {
        fn from(value: HslValue) -> Self { ColorValue::Hsl(value) }
    }
}
