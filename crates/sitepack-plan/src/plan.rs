//! The assembled build plan and its ordering invariants.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sitepack_config::BuildMode;

use crate::error::{PlanError, Result};
use crate::stage::{StageDescriptor, StageKind};

/// Stage pairs where every `.0` must come before every `.1`.
const ORDERED_PAIRS: &[(StageKind, StageKind)] = &[
    (StageKind::ExtractCss, StageKind::OptimizeCss),
    (StageKind::Minify, StageKind::PreRender),
    (StageKind::InjectBanner, StageKind::PreRender),
];

/// Output layout handed to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub public_path: String,
    /// File pattern for script chunks, e.g. `1.2.0/js/[name].js`
    pub script_pattern: String,
    /// File the extracted stylesheet is written to, e.g. `1.2.0/css/app.css`
    pub style_pattern: String,
    pub html_path: PathBuf,
}

/// Source map strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevTool {
    /// Fast rebuilds, line-level mappings evaluated in place
    #[serde(rename = "cheap-module-eval-source-map")]
    CheapModuleEvalSourceMap,
}

/// In-memory development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    pub content_base: PathBuf,
    pub host: String,
    pub port: u16,
    pub compress: bool,
    pub history_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub mode: BuildMode,

    /// Symbolic chunk name to source module
    pub entries: IndexMap<String, PathBuf>,

    pub output: OutputConfig,

    pub stages: Vec<StageDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<DevTool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,
}

impl BuildPlan {
    pub fn kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(|stage| stage.kind).collect()
    }

    pub fn contains(&self, kind: StageKind) -> bool {
        self.stages.iter().any(|stage| stage.kind == kind)
    }

    pub fn count(&self, kind: StageKind) -> usize {
        self.stages.iter().filter(|stage| stage.kind == kind).count()
    }

    /// First stage of the given kind.
    pub fn stage(&self, kind: StageKind) -> Option<&StageDescriptor> {
        self.stages.iter().find(|stage| stage.kind == kind)
    }

    fn first_position(&self, kind: StageKind) -> Option<usize> {
        self.stages.iter().position(|stage| stage.kind == kind)
    }

    fn last_position(&self, kind: StageKind) -> Option<usize> {
        self.stages.iter().rposition(|stage| stage.kind == kind)
    }

    /// Verify the ordering invariants the bundler relies on.
    ///
    /// # Errors
    ///
    /// - `OrderViolation` when a stage would run before a stage it depends on
    /// - `DuplicateUpload` when more than one upload stage is present
    /// - `UploadNotLast` when the upload stage is followed by anything
    pub fn check_ordering(&self) -> Result<()> {
        for &(before, after) in ORDERED_PAIRS {
            if let (Some(last_before), Some(first_after)) =
                (self.last_position(before), self.first_position(after))
            {
                if last_before > first_after {
                    return Err(PlanError::OrderViolation { before, after });
                }
            }
        }

        let uploads = self.count(StageKind::Upload);
        if uploads > 1 {
            return Err(PlanError::DuplicateUpload { count: uploads });
        }

        if let Some(position) = self.first_position(StageKind::Upload) {
            if position + 1 != self.stages.len() {
                return Err(PlanError::UploadNotLast { position });
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
