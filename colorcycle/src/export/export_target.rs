// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use smallvec::{SmallVec, smallvec};

use crate::{ColorCycleError, ColorResult, TransformColor, join_accepted};

pub const DEFAULT_EXPORT_EXTENSION: &str = "png";

/// Storage for supported extensions, inline for the common case.
pub type ExportExtensions = SmallVec<[String; 2]>;

/// Where a rendered color swatch would be saved. Planning a path is pure, no files are
/// touched.
///
/// ```
/// use colorcycle::{ExportTarget, RgbValue};
///
/// let target = ExportTarget::new("/tmp/swatches");
/// let path = target.plan(&RgbValue::new(255, 0, 0), None, None).unwrap();
/// assert_eq!(path, std::path::PathBuf::from("/tmp/swatches/ff0000.png"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportTarget {
    pub dir: PathBuf,
    pub extensions: ExportExtensions,
    pub default_extension: String,
}

impl Default for ExportTarget {
    fn default() -> Self { Self::new(std::env::temp_dir()) }
}

impl ExportTarget {
    /// Target `dir`, supporting only the `png` extension.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extensions: smallvec![DEFAULT_EXPORT_EXTENSION.to_string()],
            default_extension: DEFAULT_EXPORT_EXTENSION.to_string(),
        }
    }

    /// Plan `dir/<filename>.<extension>`.
    ///
    /// - `filename` defaults to the hex string of `color`.
    /// - `extension` defaults to [`ExportTarget::default_extension`]. A leading `.` is
    ///   ignored, and matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// - [`ColorCycleError::UnsupportedExtension`] if the extension isn't in
    ///   [`ExportTarget::extensions`].
    /// - [`ColorCycleError::HueOutOfRange`] if `filename` is `None` and `color` can't be
    ///   converted to hex.
    ///
    /// [`ExportTarget::default_extension`]: Self::default_extension
    /// [`ExportTarget::extensions`]: Self::extensions
    pub fn plan<C>(
        &self,
        color: &C,
        filename: Option<&str>,
        extension: Option<&str>,
    ) -> ColorResult<PathBuf>
    where
        C: TransformColor + ?Sized,
    {
        let extension = self.resolve_extension(extension)?;
        let filename = match filename {
            Some(it) => it.to_string(),
            None => color.to_hex()?.to_string(),
        };
        let path = self.dir.join(format!("{filename}.{extension}"));
        tracing::debug!(message = "Planned export path", path = ?path);
        Ok(path)
    }

    fn resolve_extension(&self, extension: Option<&str>) -> ColorResult<String> {
        let Some(requested) = extension else {
            return Ok(self.default_extension.clone());
        };
        let normalized = requested.trim_start_matches('.').to_lowercase();
        if self.extensions.iter().any(|it| *it == normalized) {
            Ok(normalized)
        } else {
            Err(ColorCycleError::UnsupportedExtension {
                extension: requested.to_string(),
                supported: join_accepted(&self.extensions),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{HslValue, RgbValue, assert_eq2};

    #[test]
    fn test_default_is_temp_dir_png() {
        let target = ExportTarget::default();
        assert_eq2!(target.dir, std::env::temp_dir());
        assert_eq2!(target.extensions.as_slice(), &["png".to_string()]);
        assert_eq2!(target.default_extension, "png");
    }

    #[test]
    fn test_plan_defaults_to_hex_filename() {
        let target = ExportTarget::new("out");
        let path = target.plan(&RgbValue::new(5, 10, 15), None, None).unwrap();
        assert_eq2!(path, PathBuf::from("out").join("050a0f.png"));
    }

    #[test]
    fn test_plan_with_filename() {
        let target = ExportTarget::new("out");
        let path = target
            .plan(&RgbValue::new(5, 10, 15), Some("swatch"), None)
            .unwrap();
        assert_eq2!(path, PathBuf::from("out").join("swatch.png"));
    }

    #[test_case("png")]
    #[test_case(".png")]
    #[test_case("PNG")]
    fn test_plan_accepts_supported_extension(extension: &str) {
        let target = ExportTarget::new("out");
        let path = target
            .plan(&RgbValue::new(0, 0, 0), Some("a"), Some(extension))
            .unwrap();
        assert_eq2!(path, PathBuf::from("out").join("a.png"));
    }

    #[test_case("jpg")]
    #[test_case("")]
    #[test_case("png2")]
    fn test_plan_rejects_unsupported_extension(extension: &str) {
        let target = ExportTarget::new("out");
        match target.plan(&RgbValue::new(0, 0, 0), None, Some(extension)) {
            Err(ColorCycleError::UnsupportedExtension {
                extension: got,
                supported,
            }) => {
                assert_eq2!(got, extension);
                assert_eq2!(supported, r#"{"png"}"#);
            }
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_with_extra_extensions() {
        let mut target = ExportTarget::new("out");
        target.extensions.push("jpg".to_string());
        let path = target
            .plan(&RgbValue::new(0, 0, 0), Some("a"), Some("jpg"))
            .unwrap();
        assert_eq2!(path, PathBuf::from("out").join("a.jpg"));
    }

    #[test]
    fn test_plan_propagates_hue_error_only_when_filename_needed() {
        let target = ExportTarget::new("out");
        let bad = HslValue::new(400.0, 1.0, 0.5);
        assert!(matches!(
            target.plan(&bad, None, None),
            Err(ColorCycleError::HueOutOfRange { .. })
        ));
        assert!(target.plan(&bad, Some("named"), None).is_ok());
    }
}
