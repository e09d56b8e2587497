// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use chrono::{Local, NaiveTime, Timelike};

use crate::{ColorCycleError, ColorResult, CycleConfig, FULL_TURN_DEGREES, HslValue,
            HueCycle, wrap_hue_degrees};

/// Accepted text formats for [`ClockTime::from_str`], tried in order.
pub const CLOCK_TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// A wall clock reading that can be turned into a hue, and then into a color.
///
/// The fields are not validated. Out of range values are accepted, and simply produce
/// an unusual hue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ClockTime {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl ClockTime {
    #[must_use]
    pub const fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Read the local wall clock. Nothing is retained between calls.
    #[must_use]
    pub fn now() -> Self {
        let it = Self::from(Local::now().time());
        tracing::trace!(message = "Read wall clock", time = %it);
        it
    }

    /// Seconds elapsed since the start of the current hour. The hour is not part of
    /// this, so the color wheel repeats every hour (with the default span).
    ///
    /// Computed as `f64` so that any field values, however large, give a finite result.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed_seconds(&self) -> f64 { self.minute as f64 * 60.0 + self.second as f64 }

    /// Map this time onto a hue in `[0, 360)`.
    ///
    /// One full turn of the wheel takes `span_minutes`. The hue is offset by
    /// `start_hue`, and mirrored (`360 - hue`) when `reverse` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ColorCycleError::InvalidConfig`] if `hue_cycle` fails
    /// [`HueCycle::validate`].
    pub fn to_hue(&self, hue_cycle: &HueCycle) -> ColorResult<f64> {
        hue_cycle.validate()?;
        let seconds_per_turn = 60.0 * hue_cycle.span_minutes;
        let hue = self.elapsed_seconds() * FULL_TURN_DEGREES / seconds_per_turn;
        let hue = wrap_hue_degrees(hue + hue_cycle.start_hue);
        Ok(if hue_cycle.reverse {
            wrap_hue_degrees(FULL_TURN_DEGREES - hue)
        } else {
            hue
        })
    }

    /// Build an [`HslValue`] from [`ClockTime::to_hue`] and the constant saturation and
    /// luminescence in `config`.
    ///
    /// # Errors
    ///
    /// Same as [`ClockTime::to_hue`].
    pub fn to_hsl(&self, config: &CycleConfig) -> ColorResult<HslValue> {
        let hue = self.to_hue(&config.hue_cycle())?;
        Ok(HslValue::new(hue, config.saturation, config.luminescence))
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self::new(
            i64::from(time.hour()),
            i64::from(time.minute()),
            i64::from(time.second()),
        )
    }
}

/// Parse `HH:MM:SS` or `HH:MM` (24 hour clock).
impl FromStr for ClockTime {
    type Err = ColorCycleError;

    fn from_str(input: &str) -> ColorResult<Self> {
        let trimmed = input.trim();
        CLOCK_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .map(Self::from)
            .ok_or_else(|| ColorCycleError::InvalidTime {
                input: input.to_string(),
            })
    }
}

/// Renders as `HH:MM:SS`.
impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
