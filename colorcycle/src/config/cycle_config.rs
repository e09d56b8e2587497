// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ColorCycleError, ColorResult};

pub const DEFAULT_SATURATION: f64 = 0.25;
pub const DEFAULT_LUMINESCENCE: f64 = 0.5;
pub const DEFAULT_SPAN_MINUTES: f64 = 60.0;

/// How wall clock time maps onto the color wheel. See [`crate::ClockTime::to_hue`].
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct HueCycle {
    /// Hue (degrees) at the start of each span.
    pub start_hue: f64,
    /// Walk the wheel in the opposite direction.
    pub reverse: bool,
    /// Minutes for one full turn.
    pub span_minutes: f64,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self {
            start_hue: 0.0,
            reverse: false,
            span_minutes: DEFAULT_SPAN_MINUTES,
        }
    }
}

impl HueCycle {
    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidConfig`] if:
    /// - `span_minutes` is not a finite number greater than zero.
    /// - `start_hue` is not finite.
    pub fn validate(&self) -> ColorResult<()> {
        if !(self.span_minutes.is_finite() && self.span_minutes > 0.0) {
            return Err(invalid(format!(
                "span_minutes must be greater than 0, got {}",
                self.span_minutes
            )));
        }
        if !self.start_hue.is_finite() {
            return Err(invalid(format!(
                "start_hue must be a finite number, got {}",
                self.start_hue
            )));
        }
        Ok(())
    }
}

/// Everything needed to turn a [`crate::ClockTime`] into a color.
///
/// Missing fields in JSON fall back to [`CycleConfig::default`], so `{}` is a valid
/// config file.
///
/// ```
/// use colorcycle::CycleConfig;
///
/// let config = CycleConfig::try_from_json_str(r#"{ "start_hue": 90.0 }"#).unwrap();
/// assert_eq!(config.start_hue, 90.0);
/// assert_eq!(config.saturation, 0.25);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    pub saturation: f64,
    pub luminescence: f64,
    pub start_hue: f64,
    pub reverse: bool,
    pub span_minutes: f64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        let HueCycle {
            start_hue,
            reverse,
            span_minutes,
        } = HueCycle::default();
        Self {
            saturation: DEFAULT_SATURATION,
            luminescence: DEFAULT_LUMINESCENCE,
            start_hue,
            reverse,
            span_minutes,
        }
    }
}

impl From<HueCycle> for CycleConfig {
    fn from(hue_cycle: HueCycle) -> Self {
        Self {
            start_hue: hue_cycle.start_hue,
            reverse: hue_cycle.reverse,
            span_minutes: hue_cycle.span_minutes,
            ..Self::default()
        }
    }
}

impl CycleConfig {
    #[must_use]
    pub const fn hue_cycle(&self) -> HueCycle {
        HueCycle {
            start_hue: self.start_hue,
            reverse: self.reverse,
            span_minutes: self.span_minutes,
        }
    }

    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidConfig`] if [`HueCycle::validate`] fails, or
    /// if `saturation` or `luminescence` is outside `[0, 1]`.
    pub fn validate(&self) -> ColorResult<()> {
        self.hue_cycle().validate()?;
        for (name, value) in [
            ("saturation", self.saturation),
            ("luminescence", self.luminescence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be in [0, 1], got {value}")));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidConfig`] if the text is not a JSON object with
    /// the expected field types, or if [`CycleConfig::validate`] fails.
    pub fn try_from_json_str(json: &str) -> ColorResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            invalid(format!("could not decode JSON: {err}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// - [`ColorCycleError::ConfigIo`] if the file can't be read.
    /// - [`ColorCycleError::ConfigParse`] if it isn't valid JSON for this type.
    /// - [`ColorCycleError::InvalidConfig`] if [`CycleConfig::validate`] fails.
    pub fn try_load(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| ColorCycleError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| ColorCycleError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(message = "Loaded config", path = ?path, config = ?config);
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidConfig`] if serialization fails, which does
    /// not happen for finite values.
    pub fn to_json_string_pretty(&self) -> ColorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| invalid(format!("could not encode JSON: {err}")))
    }
}

fn invalid(reason: String) -> ColorCycleError { ColorCycleError::InvalidConfig { reason } }
