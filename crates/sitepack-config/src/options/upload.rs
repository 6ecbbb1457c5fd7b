use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::default_upload_source;

/// Remote upload settings. Server directory and target come from `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Local directory whose contents are shipped
    #[serde(default = "default_upload_source")]
    pub source: PathBuf,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            host: None,
            source: default_upload_source(),
        }
    }
}
