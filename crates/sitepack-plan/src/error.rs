//! Errors raised while checking or running a build plan.

use thiserror::Error;

use crate::stage::StageKind;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("stage '{after}' must run after '{before}'")]
    OrderViolation { before: StageKind, after: StageKind },

    #[error("plan contains {count} upload stages, at most one is allowed")]
    DuplicateUpload { count: usize },

    #[error("upload stage is at position {position} but must be the last stage")]
    UploadNotLast { position: usize },

    #[error("stage #{index} '{kind}' failed: {source}")]
    StageFailed {
        index: usize,
        kind: StageKind,
        #[source]
        source: StageExecutionError,
    },
}

/// Failure reported by an external collaborator executing a stage.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StageExecutionError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StageExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
