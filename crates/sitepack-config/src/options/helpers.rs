use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::options::StaticMapping;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_entries() -> IndexMap<String, PathBuf> {
    IndexMap::from([("app".to_string(), PathBuf::from("./src/app.js"))])
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("./src/index.html")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_public_path() -> String {
    "/".to_string()
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_static_mappings() -> Vec<StaticMapping> {
    vec![StaticMapping {
        from: PathBuf::from("static"),
        to: PathBuf::from("build/lib"),
    }]
}

pub(crate) fn default_routes() -> Vec<String> {
    vec!["/".to_string(), "/detail".to_string(), "/detail2".to_string()]
}

pub(crate) fn default_vendor_manifest() -> PathBuf {
    PathBuf::from("vendor-manifest.json")
}

pub(crate) fn default_vendor_script() -> PathBuf {
    PathBuf::from("static/vendor.dll.js")
}

pub(crate) fn default_vendor_asset() -> String {
    "lib/vendor.dll.js".to_string()
}

pub(crate) fn default_render_event() -> String {
    "render-event".to_string()
}

pub(crate) fn default_app_root_id() -> String {
    "app".to_string()
}

pub(crate) fn default_inject() -> Map<String, Value> {
    Map::from_iter([("foo".to_string(), Value::String("bar".to_string()))])
}

pub(crate) fn default_upload_source() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".into()
}

pub(crate) fn default_port() -> u16 {
    8080
}
