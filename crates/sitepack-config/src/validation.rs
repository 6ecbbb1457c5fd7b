//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use). Both run before any stage is planned.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::package::PackageInfo;

/// Everything a validator looks at.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub site: &'a SiteConfig,
    pub package: &'a PackageInfo,
    pub mode: BuildMode,
}

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, cx: ValidationContext<'_>) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sitepack_config::{
///     BuildMode, ConfigValidator, PackageInfo, SchemaValidator, SiteConfig, ValidationContext,
/// };
///
/// let site = SiteConfig::default();
/// let package = PackageInfo::new("shop", "1.0.0");
/// SchemaValidator
///     .validate(ValidationContext { site: &site, package: &package, mode: BuildMode::Production })
///     .unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, cx: ValidationContext<'_>) -> Result<()> {
        let ValidationContext {
            site,
            package,
            mode,
        } = cx;

        if site.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if package.name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "name".to_string(),
                hint: "Set 'name' in package.json".to_string(),
            });
        }

        // The version is baked into every bundle path
        if package.version.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "version".to_string(),
                hint: "Set 'version' in package.json".to_string(),
            });
        }

        for route in &site.routes {
            if !route.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: "routes".to_string(),
                    hint: Some(format!("route '{route}' must start with '/'")),
                });
            }
        }

        if site.prerender.app_root_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prerender.app_root_id".to_string(),
                hint: Some("the application root id cannot be empty".to_string()),
            });
        }

        if mode.is_upload() {
            validate_upload(site, package)?;
        }

        Ok(())
    }
}

fn validate_upload(site: &SiteConfig, package: &PackageInfo) -> Result<()> {
    match site.upload.host.as_deref() {
        Some(host) if !host.trim().is_empty() => {}
        _ => {
            return Err(ConfigError::MissingField {
                field: "upload.host".to_string(),
                hint: "Set [upload] host in sitepack.toml or SITEPACK_UPLOAD__HOST".to_string(),
            });
        }
    }

    if package.ftp_server.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingField {
            field: "ftpServer".to_string(),
            hint: "Set 'ftpServer' in package.json to choose the server directory".to_string(),
        });
    }

    if package.ftp_target.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingField {
            field: "ftpTarget".to_string(),
            hint: "Set 'ftpTarget' in package.json to choose the target path".to_string(),
        });
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then verifies that the inputs the build cannot
/// start without exist on disk.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, cx: ValidationContext<'_>) -> Result<()> {
        SchemaValidator.validate(cx)?;
        let site = cx.site;

        for entry in site.entries.values() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        let template = self.root.join(&site.template);
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        let manifest = self.root.join(&site.vendor.manifest);
        if !manifest.is_file() {
            return Err(ConfigError::ManifestNotFound { path: manifest });
        }

        // Development injects the vendor script straight from disk
        if cx.mode == BuildMode::Development {
            let script = self.root.join(&site.vendor.script);
            if !script.is_file() {
                return Err(ConfigError::VendorScriptNotFound { path: script });
            }
        }

        for mapping in &site.static_mappings {
            let from = self.root.join(&mapping.from);
            if !from.is_dir() {
                tracing::warn!(path = %from.display(), "static directory does not exist, nothing will be copied");
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(site: &SiteConfig, package: &PackageInfo, mode: BuildMode) -> Result<()> {
    SchemaValidator.validate(ValidationContext {
        site,
        package,
        mode,
    })
}

/// Convenience function for filesystem validation
pub fn validate_fs(
    site: &SiteConfig,
    package: &PackageInfo,
    mode: BuildMode,
    root: impl AsRef<Path>,
) -> Result<()> {
    FsValidator::new(root).validate(ValidationContext {
        site,
        package,
        mode,
    })
}
