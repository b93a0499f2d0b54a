//! Config loading, discovery, and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{DevError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DevError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DevError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Without one, `realestate.yaml` in `cwd`
    /// is used when present; otherwise the built-in defaults apply.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DevError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every field must be non-empty
    /// - `database_url` must use the `postgres://` or `postgresql://` scheme
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("compose_file", &self.compose_file),
            ("database_service", &self.database_service),
            ("database_user", &self.database_user),
            ("database_name", &self.database_name),
            ("database_url", &self.database_url),
            ("migrations_dir", &self.migrations_dir),
            ("server_container", &self.server_container),
            ("database_container", &self.database_container),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(DevError::ConfigError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if !(self.database_url.starts_with("postgres://")
            || self.database_url.starts_with("postgresql://"))
        {
            return Err(DevError::ConfigError(format!(
                "config validation failed: database_url must start with postgres:// or postgresql:// (found '{}')",
                self.database_url
            )));
        }

        Ok(())
    }
}
