//! Package metadata read from `package.json`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// The subset of `package.json` the build cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,

    pub version: String,

    /// URL prefix prepended to relative asset references in pre-rendered pages
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Remote server directory for uploads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftp_server: Option<String>,

    /// Remote target path for uploads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftp_target: Option<String>,
}

fn default_public_path() -> String {
    "/".to_string()
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            public_path: default_public_path(),
            ftp_server: None,
            ftp_target: None,
        }
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    pub fn with_upload_target(
        mut self,
        server: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.ftp_server = Some(server.into());
        self.ftp_target = Some(target.into());
        self
    }

    /// Load `package.json` from the project root.
    ///
    /// # Errors
    ///
    /// `PackageNotFound` when the file is absent, `InvalidValue` when it is
    /// not valid JSON or lacks `name`/`version`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join("package.json");
        if !path.is_file() {
            return Err(ConfigError::PackageNotFound { path });
        }

        let content = fs::read_to_string(&path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {e}")),
            })?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
