// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error kinds for every fallible operation in this crate.
//!
//! Library functions return [`ColorResult`] so that callers can match on the exact
//! [`ColorCycleError`] variant. Application code (binaries) can use [`CommonResult`],
//! which is [`miette::Result`], and rely on `?` to convert any [`ColorCycleError`] into
//! a [`miette::Report`].
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::path::PathBuf;

/// Type alias to make it easy to work with [miette::Result] in application code.
pub type CommonResult<T> = miette::Result<T>;

/// Result type returned by all fallible library operations.
pub type ColorResult<T> = core::result::Result<T, ColorCycleError>;

/// All the ways that converting, formatting, parsing, or configuring can fail.
///
/// | Variant                  | Raised by                                       |
/// | :----------------------- | :---------------------------------------------- |
/// | [`HueOutOfRange`]        | HSL to RGB conversion                           |
/// | [`InvalidMode`]          | [`ColorFormatter::format`]                      |
/// | [`UnsupportedExtension`] | [`ExportTarget::plan`]                          |
/// | [`InvalidHexColor`]      | [`HexValue::try_from_hex_str`]                  |
/// | [`InvalidTime`]          | parsing a [`ClockTime`] from text               |
/// | [`InvalidConfig`]        | [`CycleConfig::validate`], [`HueCycle::validate`] |
/// | [`ConfigIo`]             | reading a config file                           |
/// | [`ConfigParse`]          | decoding a config file                          |
///
/// [`HueOutOfRange`]: Self::HueOutOfRange
/// [`InvalidMode`]: Self::InvalidMode
/// [`UnsupportedExtension`]: Self::UnsupportedExtension
/// [`InvalidHexColor`]: Self::InvalidHexColor
/// [`InvalidTime`]: Self::InvalidTime
/// [`InvalidConfig`]: Self::InvalidConfig
/// [`ConfigIo`]: Self::ConfigIo
/// [`ConfigParse`]: Self::ConfigParse
/// [`ColorFormatter::format`]: crate::ColorFormatter::format
/// [`ExportTarget::plan`]: crate::ExportTarget::plan
/// [`HexValue::try_from_hex_str`]: crate::HexValue::try_from_hex_str
/// [`ClockTime`]: crate::ClockTime
/// [`CycleConfig::validate`]: crate::CycleConfig::validate
/// [`HueCycle::validate`]: crate::HueCycle::validate
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ColorCycleError {
    #[error("Hue {hue} is outside the range [0, 360)")]
    #[diagnostic(
        code(colorcycle::color::hue_out_of_range),
        help("Wrap the hue into [0, 360) before converting, eg: `hue.rem_euclid(360.0)`")
    )]
    HueOutOfRange { hue: f64 },

    #[error("Unable to determine color mode. Expected one of {accepted}, got {mode:?}")]
    #[diagnostic(
        code(colorcycle::format::invalid_mode),
        help("Use one of the accepted modes. An empty string renders nothing")
    )]
    InvalidMode { mode: String, accepted: String },

    #[error("Unsupported export extension {extension:?}. Expected one of {supported}")]
    #[diagnostic(
        code(colorcycle::export::unsupported_extension),
        help("Use one of the supported extensions, eg: `png`")
    )]
    UnsupportedExtension {
        extension: String,
        supported: String,
    },

    #[error("Invalid hex color {input:?}")]
    #[diagnostic(
        code(colorcycle::color::invalid_hex_color),
        help("Use 6 hex digits with an optional leading `#`, eg: `ff8800` or `#FF8800`")
    )]
    InvalidHexColor { input: String },

    #[error("Invalid time {input:?}")]
    #[diagnostic(
        code(colorcycle::clock::invalid_time),
        help("Use `HH:MM` or `HH:MM:SS` in 24 hour format, eg: `14:30` or `14:30:05`")
    )]
    InvalidTime { input: String },

    #[error("Invalid configuration: {reason}")]
    #[diagnostic(
        code(colorcycle::config::invalid),
        help(
            "`span_minutes` must be > 0, `start_hue` finite, and `saturation` and \
             `luminescence` in [0, 1]"
        )
    )]
    InvalidConfig { reason: String },

    #[error("Could not read config file {path:?}")]
    #[diagnostic(
        code(colorcycle::config::io),
        help("Check that the file exists and is readable, or run `colorcycle config init`")
    )]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path:?}")]
    #[diagnostic(
        code(colorcycle::config::parse),
        help("The config file must be a JSON object, eg: `{{\"saturation\": 0.25}}`")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Render a list of accepted values as `{a, b, c}` for error messages.
pub fn join_accepted<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let joined = items
        .into_iter()
        .map(|it| format!("{:?}", it.to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{joined}}}")
}
