//! Configuration module for snipster
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the user's config directory (or `--config <file>`)
//! 3. `SNIPSTER_*` environment variables (e.g. `SNIPSTER_BACKEND=json`)
//! 4. `DATABASE_URL`, which overrides `database_url`
//!
//! Command-line flags are applied on top by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::repo::{Backend, DatabaseLocation, RepoError, StorageConfig};

/// Prefix of the environment variables read into the configuration
pub const ENV_PREFIX: &str = "SNIPSTER";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SnipsterConfig {
    /// Storage backend to use
    pub backend: Backend,

    /// SQLite location, e.g. `sqlite:///snipster.sqlite` or `sqlite:///:memory:`
    pub database_url: String,

    /// Directory holding `snippets.json` for the JSON backend
    pub json_dir: PathBuf,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Syntax-highlight code in `show`
    pub highlight: bool,
}

impl Default for SnipsterConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            backend: Backend::default(),
            database_url: format!("sqlite:///{}", data_dir.join("snipster.sqlite").display()),
            json_dir: data_dir,
            quiet: false,
            highlight: true,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snipster")
}

impl SnipsterConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("snipster").join("config.toml"))
    }

    /// Load configuration from every layer
    ///
    /// An explicitly given `path` must exist; the default config file is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or the merged values
    /// do not deserialize.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        base_builder(&file, required)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Load defaults plus one TOML file, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable or invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        base_builder(path, true)?.build()?.try_deserialize()
    }

    /// Save configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the storage settings handed to [`crate::repo::open`]
    ///
    /// # Errors
    ///
    /// Returns `RepoError::InvalidLocation` if `database_url` cannot be parsed.
    pub fn storage(&self) -> Result<StorageConfig, RepoError> {
        Ok(StorageConfig {
            backend: self.backend,
            database: DatabaseLocation::parse(&self.database_url)?,
            json_dir: self.json_dir.clone(),
        })
    }
}

fn base_builder(file: &Path, required: bool) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = SnipsterConfig::default();

    Ok(Config::builder()
        .set_default("backend", defaults.backend.to_string())?
        .set_default("database_url", defaults.database_url)?
        .set_default("json_dir", defaults.json_dir.to_string_lossy().into_owned())?
        .set_default("quiet", defaults.quiet)?
        .set_default("highlight", defaults.highlight)?
        .add_source(
            File::from(file.to_path_buf())
                .format(FileFormat::Toml)
                .required(required),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SnipsterConfig::default();
        assert_eq!(config.backend, Backend::Sqlite);
        assert!(config.database_url.starts_with("sqlite:///"));
        assert!(config.database_url.ends_with("snipster.sqlite"));
        assert!(!config.quiet);
        assert!(config.highlight);
    }

    #[test]
    fn test_default_storage_points_at_file() {
        let storage = SnipsterConfig::default().storage().unwrap();
        match storage.database {
            DatabaseLocation::File(path) => assert!(path.ends_with("snipster.sqlite")),
            DatabaseLocation::Memory => panic!("default database should be a file"),
        }
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "backend = \"json\"\njson_dir = \"/tmp/snips\"\n").unwrap();

        let config = SnipsterConfig::from_file(&path).unwrap();
        assert_eq!(config.backend, Backend::Json);
        assert_eq!(config.json_dir, PathBuf::from("/tmp/snips"));
        assert_eq!(config.database_url, SnipsterConfig::default().database_url);
        assert!(config.highlight);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = SnipsterConfig {
            backend: Backend::Memory,
            database_url: "sqlite:///:memory:".into(),
            json_dir: PathBuf::from("/tmp/json"),
            quiet: true,
            highlight: false,
        };
        config.save(&path).unwrap();

        assert_eq!(SnipsterConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_required_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(SnipsterConfig::from_file(&temp_dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_invalid_backend_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "backend = \"redis\"\n").unwrap();
        assert!(SnipsterConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_bad_database_url_surfaces_on_storage() {
        let config = SnipsterConfig {
            database_url: "mysql://localhost/snips".into(),
            ..SnipsterConfig::default()
        };
        assert!(matches!(config.storage(), Err(RepoError::InvalidLocation(_))));
    }
}
