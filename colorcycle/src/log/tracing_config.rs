// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "colorcycle_log.txt";

/// Where log output goes, and how much of it.
///
/// Anything that converts into this type can be passed to
/// [`crate::try_initialize_logging_global`]. Configs compose with `+`:
///
/// ```
/// use colorcycle::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config: TracingConfig = TracingConfig::from(LevelFilter::TRACE)
///     + TracingConfig::from(DisplayPreference::Stderr);
/// assert_eq!(config.level_filter, LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "colorcycle_log.txt".into())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` in [`WriterConfig::File`] and [`WriterConfig::DisplayAndFile`] is the
/// log file path, eg: `/tmp/colorcycle_log.txt`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

impl Default for TracingConfig {
    /// Logging is off by default.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: Option<String>) -> Self {
        WriterConfig::File(path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()))
            .into()
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        preferred_display.into()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self.writer_config, WriterConfig::None)
            && !matches!(self.level_filter, LevelFilter::OFF)
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        WriterConfig::Display(preferred_display).into()
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level filter wins. Writer configs merge as below.
impl Add for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// A display and a file merge into [`WriterConfig::DisplayAndFile`]. When both sides
/// set the same thing, `rhs` wins. [`WriterConfig::None`] is the identity.
impl Add for WriterConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (Display(_) | File(_), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
            (DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_disabled() {
        assert!(!TracingConfig::default().is_enabled());
        assert!(!TracingConfig::from(LevelFilter::OFF).is_enabled());
        assert!(TracingConfig::new_display(DisplayPreference::Stdout).is_enabled());
    }

    #[test]
    fn test_from_conversions() {
        let config = TracingConfig::from(tracing::Level::INFO);
        assert_eq2!(config.level_filter, LevelFilter::INFO);
        assert_eq2!(
            config.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config = TracingConfig::new_file(Some("a.log".into()));
        assert_eq2!(config.writer_config, WriterConfig::File("a.log".into()));
        assert_eq2!(config.level_filter, LevelFilter::DEBUG);
    }

    #[test]
    fn test_add_takes_more_verbose_level() {
        let lhs = TracingConfig::from(LevelFilter::WARN);
        let rhs = TracingConfig::from(LevelFilter::TRACE);
        assert_eq2!((lhs + rhs).level_filter, LevelFilter::TRACE);
    }

    #[test]
    fn test_add_writer_configs() {
        let stdout = DisplayPreference::Stdout;
        let stderr = DisplayPreference::Stderr;
        let a = "a.log".to_string();
        let b = "b.log".to_string();

        let none = WriterConfig::None;
        let display_stdout = WriterConfig::Display(stdout);
        let display_stderr = WriterConfig::Display(stderr);
        let file_a = WriterConfig::File(a.clone());
        let file_b = WriterConfig::File(b.clone());

        // Identity.
        assert_eq2!(none.clone() + file_a.clone(), file_a);
        assert_eq2!(display_stdout.clone() + none.clone(), display_stdout);

        // No collision.
        assert_eq2!(
            display_stdout.clone() + file_a.clone(),
            WriterConfig::DisplayAndFile(stdout, a.clone())
        );
        assert_eq2!(
            file_a.clone() + display_stderr.clone(),
            WriterConfig::DisplayAndFile(stderr, a.clone())
        );

        // Collision, rhs wins.
        assert_eq2!(display_stdout.clone() + display_stderr.clone(), display_stderr);
        assert_eq2!(file_a.clone() + file_b.clone(), file_b);
        assert_eq2!(
            WriterConfig::DisplayAndFile(stdout, a.clone()) + file_b.clone(),
            WriterConfig::DisplayAndFile(stdout, b.clone())
        );
        assert_eq2!(
            WriterConfig::DisplayAndFile(stdout, a.clone()) + display_stderr,
            WriterConfig::DisplayAndFile(stderr, a.clone())
        );
        assert_eq2!(
            file_a + WriterConfig::DisplayAndFile(stderr, b.clone()),
            WriterConfig::DisplayAndFile(stderr, b)
        );
    }
}
