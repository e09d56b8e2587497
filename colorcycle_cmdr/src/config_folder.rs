// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use colorcycle::{ColorResult, CommonResult, CycleConfig};
use dirs::config_dir;
use miette::IntoDiagnostic;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    /// This generates a `to_string()` method used by [`get_config_file_path`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "colorcycle",
            ConfigPaths::ConfigFile => "config.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config file is stored, inside `folder`.
#[must_use]
pub fn get_config_file_path(folder: &Path) -> PathBuf {
    folder.join(ConfigPaths::ConfigFile.to_string())
}

/// This is where the config folder is, eg: `~/.config/colorcycle` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string()))
}

/// The config file to use: `explicit` if given, otherwise the default location.
#[must_use]
pub fn resolve_config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => try_get_config_folder_path().map(|folder| get_config_file_path(&folder)),
    }
}

/// Load the config that flags are applied on top of.
///
/// - An `explicit` file must exist and be valid.
/// - The default file is optional. If it is missing, [`CycleConfig::default`] is used.
///
/// # Errors
///
/// Returns a config error from [`CycleConfig::try_load`].
pub fn try_load_cycle_config(explicit: Option<&Path>) -> ColorResult<CycleConfig> {
    if let Some(path) = explicit {
        return CycleConfig::try_load(path);
    }
    match resolve_config_file_path(None) {
        Some(path) if path.exists() => CycleConfig::try_load(path),
        maybe_path => {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "No config file, using defaults",
                path = ?maybe_path
            );
            Ok(CycleConfig::default())
        }
    }
}

/// Write `config` to `path` as pretty JSON, creating parent folders.
///
/// # Errors
///
/// Returns an error if `path` already exists and `force` is false, or if the folder or
/// file can't be written.
pub fn try_write_config_file(
    path: &Path,
    config: &CycleConfig,
    force: bool,
) -> CommonResult<()> {
    if path.exists() && !force {
        return Err(miette::miette!(
            code = "colorcycle::config::exists",
            help = "Pass `--force` to overwrite it",
            "Config file {} already exists",
            path.display()
        ));
    }

    if let Some(folder) = path.parent() {
        fs::create_dir_all(folder).into_diagnostic()?;
    }

    let json = config.to_json_string_pretty()?;
    fs::write(path, json).into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Wrote config file", path = ?path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use colorcycle::{ColorCycleError, assert_eq2};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_config_paths_display() {
        assert_eq2!(ConfigPaths::TopLevelFolderName.to_string(), "colorcycle");
        assert_eq2!(ConfigPaths::ConfigFile.to_string(), "config.json");
        assert_eq2!(
            get_config_file_path(Path::new("base")),
            Path::new("base").join("config.json")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/some/where.json");
        assert_eq2!(resolve_config_file_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = get_config_file_path(dir.path());
        assert!(matches!(
            try_load_cycle_config(Some(&path)),
            Err(ColorCycleError::ConfigIo { .. })
        ));
    }

    #[test]
    fn test_write_then_load() {
        // Nested, so the parent folder has to be created.
        let dir = tempdir().unwrap();
        let path = get_config_file_path(&dir.path().join("colorcycle"));
        let config = CycleConfig {
            start_hue: 200.0,
            ..CycleConfig::default()
        };

        try_write_config_file(&path, &config, false).unwrap();
        assert_eq2!(try_load_cycle_config(Some(&path)).unwrap(), config);

        // Refuse to clobber, unless forced.
        assert!(try_write_config_file(&path, &CycleConfig::default(), false).is_err());
        try_write_config_file(&path, &CycleConfig::default(), true).unwrap();
        assert_eq2!(
            try_load_cycle_config(Some(&path)).unwrap(),
            CycleConfig::default()
        );
    }
}
