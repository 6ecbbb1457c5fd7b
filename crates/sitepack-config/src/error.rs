//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Required on-disk inputs
    #[error("package.json not found: {}", path.display())]
    PackageNotFound { path: PathBuf },

    #[error("entry module not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("vendor manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("vendor script not found: {}", path.display())]
    VendorScriptNotFound { path: PathBuf },

    // Schema errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("missing required field '{field}': {hint}")]
    MissingField { field: String, hint: String },

    #[error("invalid config value for '{field}'{}", hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Build-mode signal
    #[error("unrecognized build mode '{value}' (expected development, production or upload)")]
    UnrecognizedMode { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Whether the error means a required input file is absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            ConfigError::PackageNotFound { .. }
                | ConfigError::EntryNotFound { .. }
                | ConfigError::TemplateNotFound { .. }
                | ConfigError::ManifestNotFound { .. }
                | ConfigError::VendorScriptNotFound { .. }
        )
    }
}
