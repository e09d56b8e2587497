// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Mode tags understood by [`crate::ColorFormatter`]. The text form of each variant is
/// the tag itself, and [`ColorMode::None`] is the empty string.
///
/// ```
/// use std::str::FromStr;
/// use colorcycle::ColorMode;
///
/// assert_eq!(ColorMode::from_str("hex").unwrap(), ColorMode::Hex);
/// assert_eq!(ColorMode::from_str("").unwrap(), ColorMode::None);
/// assert_eq!(ColorMode::Rgb.to_string(), "rgb");
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    /// Renders nothing.
    #[strum(serialize = "")]
    None,
    Hsl,
    #[default]
    Hex,
    Rgb,
}
