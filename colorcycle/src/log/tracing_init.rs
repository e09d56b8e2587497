// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};
use crate::CommonResult;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber built from `options`. This can only succeed once per
/// process. Nothing is installed if logging is disabled (see
/// [`TracingConfig::is_enabled`]).
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let config: TracingConfig = options.into();
    if !config.is_enabled() {
        return Ok(());
    }
    let layers = try_create_layers(&config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()?;
    tracing::debug!(message = "Logging initialized", config = ?config);
    Ok(())
}

/// Same as [`try_initialize_logging_global`] but only for the current thread, until the
/// returned guard is dropped. Returns `None` if logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<DefaultGuard>> {
    let config: TracingConfig = options.into();
    if !config.is_enabled() {
        return Ok(None);
    }
    let layers = try_create_layers(&config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Build the layers for `config`, without installing them. The first layer is always
/// the level filter.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    config: &TracingConfig,
) -> CommonResult<Vec<Box<DynLayer<Registry>>>> {
    let mut layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(config.level_filter)];

    if let Some(layer) = try_create_display_layer(config.level_filter, &config.writer_config)
    {
        layers.push(layer);
    }

    if let Some(layer) = try_create_file_layer(config.level_filter, &config.writer_config)? {
        layers.push(layer);
    }

    Ok(layers)
}

/// `None` if `writer_config` has no display.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact().without_time();

    match writer_config {
        WriterConfig::Display(display) | WriterConfig::DisplayAndFile(display, _) => {
            match display {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// `None` if `writer_config` has no file. The file is created (or appended to) right
/// away.
///
/// # Errors
///
/// Returns an error if the path has no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => {
            let appender = try_create_file_appender(path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

/// A non rotating appender for `path`. A bare file name is placed in the current
/// directory.
fn try_create_file_appender(
    path: &str,
) -> CommonResult<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path);
    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file path {} has no file name", path.display())
    })?;
    let dir = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };
    Ok(tracing_appender::rolling::never(dir, file_name))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::{ClockTime, CycleConfig, TransformColor, assert_eq2};

    /// The log file lives as long as the returned [`TempDir`].
    fn temp_log_path(file_name: &str) -> (TempDir, String) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(file_name).to_string_lossy().to_string();
        (dir, path)
    }

    #[test]
    fn test_display_layer() {
        let layer: Option<Box<DynLayer<Registry>>> = try_create_display_layer(
            LevelFilter::DEBUG,
            &WriterConfig::Display(DisplayPreference::Stderr),
        );
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, &WriterConfig::File("x".into()));
        assert!(layer.is_none());
    }

    #[test]
    fn test_file_layer_creates_file() {
        let (_dir, path) = temp_log_path("file_layer.log");
        let layer: Option<Box<DynLayer<Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::File(path.clone()))
                .unwrap();
        assert!(layer.is_some());
        assert!(Path::new(&path).exists());
    }

    #[test]
    fn test_file_layer_rejects_path_without_file_name() {
        let result: CommonResult<Option<Box<DynLayer<Registry>>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::File("..".into()));
        assert!(result.is_err());
    }

    #[test]
    fn test_both_layers() {
        let (_dir, path) = temp_log_path("both_layers.log");
        let config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                path.clone(),
            ),
            level_filter: LevelFilter::DEBUG,
        };
        let layers = try_create_layers(&config).unwrap();
        assert_eq2!(layers.len(), 3);
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(
            try_initialize_logging_thread_local(TracingConfig::default())
                .unwrap()
                .is_none()
        );
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }

    #[serial]
    #[test]
    fn test_thread_local_logging_writes_library_events() {
        let (_dir, path) = temp_log_path("thread_local.log");
        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(path.clone()),
            level_filter: LevelFilter::TRACE,
        })
        .unwrap();
        assert!(guard.is_some());

        let hsl = ClockTime::new(0, 0, 0)
            .to_hsl(&CycleConfig::default())
            .unwrap();
        let _unused = crate::ColorFormatter::default().format(&hsl, "hex");
        let _unused = crate::HslValue::new(400.0, 0.0, 0.0).to_rgb();
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Formatting color"), "{contents}");
        assert!(contents.contains("Hue out of range"), "{contents}");
    }
}
