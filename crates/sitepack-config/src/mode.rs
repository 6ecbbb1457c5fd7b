//! Build mode and the environment signal it is read from.
//!
//! The mode is read exactly once at process start and then passed around
//! explicitly. Nothing below the CLI looks at the environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable carrying the build-mode signal.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Deployment context that decides which plan layers are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
    Upload,
}

impl BuildMode {
    pub const ALL: [BuildMode; 3] = [
        BuildMode::Development,
        BuildMode::Production,
        BuildMode::Upload,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
            BuildMode::Upload => "upload",
        }
    }

    /// Production and upload builds share the release layer.
    pub fn is_release(self) -> bool {
        matches!(self, BuildMode::Production | BuildMode::Upload)
    }

    pub fn is_upload(self) -> bool {
        self == BuildMode::Upload
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            "upload" => Ok(BuildMode::Upload),
            other => Err(ConfigError::UnrecognizedMode {
                value: other.to_string(),
            }),
        }
    }
}

/// What to do with a signal that names no known mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModePolicy {
    /// Warn and build for development.
    #[default]
    Fallback,
    /// Refuse to build.
    Strict,
}

/// Raw outcome of reading the build-mode signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSignal {
    Absent,
    Recognized(BuildMode),
    Unrecognized(String),
}

impl ModeSignal {
    /// Classify a raw signal value. An empty value counts as absent.
    pub fn read(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ModeSignal::Absent,
            Some(value) => match value.parse() {
                Ok(mode) => ModeSignal::Recognized(mode),
                Err(_) => ModeSignal::Unrecognized(value.to_string()),
            },
        }
    }

    /// Read [`MODE_ENV_VAR`] from the process environment.
    pub fn from_env() -> Self {
        match std::env::var_os(MODE_ENV_VAR) {
            Some(value) => Self::read(Some(&value.to_string_lossy())),
            None => ModeSignal::Absent,
        }
    }

    pub fn resolve(self, policy: ModePolicy) -> Result<BuildMode> {
        match self {
            ModeSignal::Recognized(mode) => Ok(mode),
            ModeSignal::Absent => {
                tracing::debug!("no build mode signal, using development");
                Ok(BuildMode::Development)
            }
            ModeSignal::Unrecognized(value) => match policy {
                ModePolicy::Fallback => {
                    tracing::warn!(
                        mode = %value,
                        "unrecognized build mode, falling back to development"
                    );
                    Ok(BuildMode::Development)
                }
                ModePolicy::Strict => Err(ConfigError::UnrecognizedMode { value }),
            },
        }
    }
}
