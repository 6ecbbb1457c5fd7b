use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::helpers::{
    default_public_path, default_vendor_asset, default_vendor_manifest, default_vendor_script,
};

/// Pre-built vendor bundle, referenced rather than rebuilt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorOptions {
    /// Manifest mapping module names to ids inside the vendor bundle
    #[serde(default = "default_vendor_manifest")]
    pub manifest: PathBuf,

    /// The vendor script on disk (injected directly in development)
    #[serde(default = "default_vendor_script")]
    pub script: PathBuf,

    /// Asset path of the vendor script inside the output tree
    #[serde(default = "default_vendor_asset")]
    pub asset: String,

    /// Public path used when injecting `asset` into release documents
    #[serde(default = "default_public_path")]
    pub asset_public_path: String,
}

impl Default for VendorOptions {
    fn default() -> Self {
        Self {
            manifest: default_vendor_manifest(),
            script: default_vendor_script(),
            asset: default_vendor_asset(),
            asset_public_path: default_public_path(),
        }
    }
}
