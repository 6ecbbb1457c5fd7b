use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::helpers::{default_app_root_id, default_inject, default_render_event};

/// Headless pre-render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrerenderOptions {
    /// Document event the page dispatches once it has finished rendering
    #[serde(default = "default_render_event")]
    pub render_event: String,

    /// Id of the element the application mounts into
    #[serde(default = "default_app_root_id")]
    pub app_root_id: String,

    /// Object injected into the page as `window.__PRERENDER_INJECTED`
    #[serde(default = "default_inject")]
    pub inject: Map<String, Value>,
}

impl Default for PrerenderOptions {
    fn default() -> Self {
        Self {
            render_event: default_render_event(),
            app_root_id: default_app_root_id(),
            inject: default_inject(),
        }
    }
}
