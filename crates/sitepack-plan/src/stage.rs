//! Stage descriptors: one named step of the build plan plus its settings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The transform a stage asks the bundler to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    LoadStyles,
    LoadComponents,
    LoadScripts,
    LoadSprites,
    LoadImages,
    ConcatModules,
    CleanOutput,
    GenerateHtml,
    ExtractCss,
    OptimizeCss,
    CopyStatic,
    ReferenceVendor,
    DefineEnv,
    LoaderOptions,
    Minify,
    IncludeExternalScript,
    InjectBanner,
    PreRender,
    Upload,
}

impl StageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StageKind::LoadStyles => "load-styles",
            StageKind::LoadComponents => "load-components",
            StageKind::LoadScripts => "load-scripts",
            StageKind::LoadSprites => "load-sprites",
            StageKind::LoadImages => "load-images",
            StageKind::ConcatModules => "concat-modules",
            StageKind::CleanOutput => "clean-output",
            StageKind::GenerateHtml => "generate-html",
            StageKind::ExtractCss => "extract-css",
            StageKind::OptimizeCss => "optimize-css",
            StageKind::CopyStatic => "copy-static",
            StageKind::ReferenceVendor => "reference-vendor",
            StageKind::DefineEnv => "define-env",
            StageKind::LoaderOptions => "loader-options",
            StageKind::Minify => "minify",
            StageKind::IncludeExternalScript => "include-external-script",
            StageKind::InjectBanner => "inject-banner",
            StageKind::PreRender => "pre-render",
            StageKind::Upload => "upload",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pipeline step. `config` is opaque to the assembler's consumers
/// and forwarded as-is to whatever executes the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDescriptor {
    pub kind: StageKind,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
}

impl StageDescriptor {
    pub fn new(kind: StageKind) -> Self {
        Self {
            kind,
            config: Map::new(),
        }
    }

    /// Set one configuration key.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.config.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }
}
