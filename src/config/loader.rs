// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DevtaskError, Result};

/// Read and deserialize a config file without validating it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DevtaskError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| DevtaskError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, validate, and anchor a relative `[config].working_dir` at the
/// directory holding the config file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut config = ConfigFile::try_from(load_from_path(path)?)?;
    config.anchor_working_dir(&config_root_dir(path));
    Ok(config)
}

/// Resolve the configuration to use for this invocation.
///
/// - An explicit path must exist and be valid.
/// - Without one, `Devtask.toml` is used if present; otherwise the built-in
///   task table applies unchanged.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config from --config");
        return load_and_validate(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        debug!(path = %default_path.display(), "loading default config file");
        load_and_validate(&default_path)
    } else {
        debug!("no config file found; using built-in tasks");
        Ok(ConfigFile::default())
    }
}

/// Default config location: `Devtask.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Devtask.toml")
}

/// Directory relative paths in a config file are resolved against.
///
/// A bare file name (`Devtask.toml`) has an empty parent, which leaves
/// relative paths relative to the current directory.
fn config_root_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_dir_of_bare_and_nested_paths() {
        assert_eq!(config_root_dir(Path::new("Devtask.toml")), PathBuf::new());
        assert_eq!(
            config_root_dir(Path::new("sub/dir/Devtask.toml")),
            PathBuf::from("sub/dir")
        );
    }
}
