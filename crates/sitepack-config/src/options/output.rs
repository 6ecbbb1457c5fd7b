use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{default_html_filename, default_output_dir, default_public_path};

/// Where the bundle is written and how it is addressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output root, relative to the project root
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Public base path used by release builds (development always uses `/`)
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Name of the generated document at the output root
    #[serde(default = "default_html_filename")]
    pub html_filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            public_path: default_public_path(),
            html_filename: default_html_filename(),
        }
    }
}

/// A static directory copied verbatim into the output tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticMapping {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl StaticMapping {
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
