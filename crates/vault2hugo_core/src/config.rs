//! Persisted user configuration.
//!
//! One setting today: the vault-relative directory image references resolve
//! against. Loaded at startup, saved on edit; the conversion pipeline reads
//! the value at call time and never caches it across invocations.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Default vault-relative image directory.
pub const DEFAULT_IMAGE_DIRECTORY: &str = "Config/Extra";

/// User configuration, stored as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vault-relative directory where embedded images are stored.
    pub image_directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_directory: DEFAULT_IMAGE_DIRECTORY.to_string(),
        }
    }
}

impl Config {
    /// Get the config file path (`<config_dir>/vault2hugo/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vault2hugo").join("config.toml"))
    }

    /// Load config from file, or return the default if the file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|source| ConvertError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConvertError::ConfigParse { path, source })
    }

    /// Save config to the default location, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(ConvertError::NoConfigDir)?;
        self.save_to(path)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConvertError::ConfigWrite {
                path: path.clone(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents).map_err(|source| ConvertError::ConfigWrite { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_image_directory() {
        assert_eq!(Config::default().image_directory, "Config/Extra");
    }

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            image_directory: "Assets/Pictures".to_string(),
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(loaded.image_directory, "Assets/Pictures");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "image_directory = [not toml").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(err, ConvertError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConvertError::ConfigRead { .. }));
    }
}
