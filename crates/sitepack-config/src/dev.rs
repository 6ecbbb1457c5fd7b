//! Development server configuration types.

use serde::{Deserialize, Serialize};

use crate::options::{default_host, default_port, default_true};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// gzip responses
    #[serde(default = "default_true")]
    pub compress: bool,

    /// Serve the generated document for unknown paths so client-side routes resolve
    #[serde(default = "default_true")]
    pub history_fallback: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            compress: true,
            history_fallback: true,
        }
    }
}
