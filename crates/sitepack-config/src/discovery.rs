//! File-based config discovery for CLI use
//!
//! Layers, lowest priority first: built-in defaults, the project config
//! file, then `SITEPACK_` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `SITEPACK_OUTPUT__PUBLIC_PATH=/static/`.
pub const ENV_PREFIX: &str = "SITEPACK_";

/// Where a configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    PackageJson(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) | ConfigSource::PackageJson(path) => path,
        }
    }
}

/// Searches a project root for sitepack configuration and loads it.
///
/// # Example
///
/// ```no_run
/// use sitepack_config::{BuildMode, ConfigDiscovery};
///
/// let config = ConfigDiscovery::new(".")
///     .load_for_mode(BuildMode::Production)
///     .unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: sitepack.toml
    /// 2. package.json (sitepack field)
    pub fn find(&self) -> Option<ConfigSource> {
        let toml_path = self.root.join("sitepack.toml");
        if toml_path.is_file() {
            return Some(ConfigSource::Toml(toml_path));
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get("sitepack") {
            Some(field) if !field.is_null() => Some(ConfigSource::PackageJson(pkg_path)),
            _ => None,
        }
    }

    /// Load the configuration without applying any profile.
    ///
    /// A project without a config file gets the defaults (plus environment
    /// overrides).
    pub fn load(&self) -> Result<SiteConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(SiteConfig::default()));

        match self.find() {
            Some(ConfigSource::Toml(path)) => {
                tracing::debug!(path = %path.display(), "loading sitepack.toml");
                figment = figment.merge(Toml::file(path));
            }
            Some(ConfigSource::PackageJson(path)) => {
                tracing::debug!(path = %path.display(), "loading sitepack field from package.json");
                figment = figment.merge(Serialized::defaults(read_package_field(&path)?));
            }
            None => tracing::debug!("no sitepack config found, using defaults"),
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Load and apply the profile for `mode`.
    pub fn load_for_mode(&self, mode: BuildMode) -> Result<SiteConfig> {
        self.load()?.materialize_profile(mode)
    }
}

fn read_package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {e}")),
    })?;

    match parsed.get("sitepack") {
        Some(field @ Value::Object(_)) => Ok(field.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: "sitepack".to_string(),
            hint: Some("The 'sitepack' field in package.json must be an object".to_string()),
        }),
    }
}
