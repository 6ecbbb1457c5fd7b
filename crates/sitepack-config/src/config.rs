//! Project-level configuration for sitepack.
//!
//! This module provides the main `SiteConfig` struct and per-mode profile
//! merging. For file discovery, see the `discovery` module.

use std::collections::HashMap;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevServerOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::BuildMode;
use crate::options::{
    default_entries, default_routes, default_static_mappings, default_template, OutputOptions,
    PrerenderOptions, StaticMapping, UploadOptions, VendorOptions,
};

/// Layout of a sitepack project. Every field has a default, so an absent
/// config file yields a usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Entry points: symbolic chunk name to source module
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, PathBuf>,

    /// HTML template the generated document is rendered from
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default)]
    pub output: OutputOptions,

    /// Static directories copied into the output tree
    #[serde(default = "default_static_mappings")]
    pub static_mappings: Vec<StaticMapping>,

    #[serde(default)]
    pub vendor: VendorOptions,

    /// Application routes that get pre-rendered in release builds
    #[serde(default = "default_routes")]
    pub routes: Vec<String>,

    #[serde(default)]
    pub prerender: PrerenderOptions,

    #[serde(default)]
    pub upload: UploadOptions,

    #[serde(default)]
    pub dev_server: DevServerOptions,

    /// Overrides keyed by build mode name, deep-merged over the base
    #[serde(default, skip_serializing)]
    pub profiles: HashMap<String, Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            template: default_template(),
            output: OutputOptions::default(),
            static_mappings: default_static_mappings(),
            vendor: VendorOptions::default(),
            routes: default_routes(),
            prerender: PrerenderOptions::default(),
            upload: UploadOptions::default(),
            dev_server: DevServerOptions::default(),
            profiles: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sitepack_config::SiteConfig;
    /// use serde_json::json;
    ///
    /// let config = SiteConfig::from_value(json!({
    ///     "routes": ["/", "/about"]
    /// }))
    /// .unwrap();
    /// assert_eq!(config.routes, vec!["/", "/about"]);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value. Profiles are not included.
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Apply the profile named after `mode`, if one exists.
    ///
    /// Objects merge key by key; arrays and scalars replace the base value.
    pub fn materialize_profile(self, mode: BuildMode) -> ConfigResult<Self> {
        let Some(overrides) = self.profiles.get(mode.as_str()) else {
            return Ok(self);
        };

        if overrides.is_null() {
            return Ok(self);
        }

        tracing::debug!(profile = mode.as_str(), "applying config profile");

        let mut base =
            serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, overrides);

        let mut merged: SiteConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = self.profiles;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.entries["app"], PathBuf::from("./src/app.js"));
        assert_eq!(config.template, PathBuf::from("./src/index.html"));
        assert_eq!(config.output.dir, PathBuf::from("build"));
        assert_eq!(config.routes, vec!["/", "/detail", "/detail2"]);
        assert_eq!(config.prerender.app_root_id, "app");
        assert_eq!(
            config.static_mappings,
            vec![StaticMapping::new("static", "build/lib")]
        );
    }

    #[test]
    fn from_value_fills_missing_fields() {
        let config = SiteConfig::from_value(json!({
            "output": { "dir": "dist" }
        }))
        .unwrap();

        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.public_path, "/");
        assert_eq!(config.vendor.asset, "lib/vendor.dll.js");
    }

    #[test]
    fn profile_merging_works() {
        let config = SiteConfig::from_value(json!({
            "routes": ["/"],
            "output": { "dir": "build", "public_path": "/" },
            "profiles": {
                "production": {
                    "routes": ["/", "/about"],
                    "output": { "public_path": "/static/" }
                }
            }
        }))
        .unwrap()
        .materialize_profile(BuildMode::Production)
        .unwrap();

        assert_eq!(config.routes, vec!["/", "/about"]);
        assert_eq!(config.output.public_path, "/static/");
        assert_eq!(config.output.dir, PathBuf::from("build"));
    }

    #[test]
    fn other_profiles_are_ignored() {
        let config = SiteConfig::from_value(json!({
            "profiles": {
                "upload": { "upload": { "host": "ftp.example.com" } }
            }
        }))
        .unwrap()
        .materialize_profile(BuildMode::Production)
        .unwrap();

        assert!(config.upload.host.is_none());
    }

    #[test]
    fn bad_profile_override_is_reported() {
        let err = SiteConfig::from_value(json!({
            "profiles": { "development": { "dev_server": { "port": "eighty" } } }
        }))
        .unwrap()
        .materialize_profile(BuildMode::Development)
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidProfileOverride { .. }));
    }
}
