//! Shared helpers for command implementations.

use std::path::PathBuf;

use sitepack_config::{BuildMode, ConfigDiscovery, ModePolicy, ModeSignal, PackageInfo, SiteConfig};

use crate::cli::ModeArgs;
use crate::error::{CliError, Result};

/// Everything a command needs to know about the project.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub mode: BuildMode,
    pub package: PackageInfo,
    /// Configuration with the mode's profile applied
    pub site: SiteConfig,
}

/// Resolve the project root from `--cwd` or the process working directory.
pub fn project_root(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(CliError::InvalidArgument(format!(
            "--cwd is not a directory: {}",
            dir.display()
        ))),
        None => Ok(std::env::current_dir()?),
    }
}

/// Resolve the build mode from `--mode`, falling back to `NODE_ENV`.
pub fn resolve_mode(args: &ModeArgs) -> Result<BuildMode> {
    let signal = match args.mode.as_deref() {
        Some(flag) => ModeSignal::read(Some(flag)),
        None => ModeSignal::from_env(),
    };
    let policy = if args.strict_mode {
        ModePolicy::Strict
    } else {
        ModePolicy::Fallback
    };
    Ok(signal.resolve(policy)?)
}

/// Load package metadata and configuration for `mode`.
pub fn load_project(cwd: Option<PathBuf>, args: &ModeArgs) -> Result<Project> {
    let root = project_root(cwd)?;
    let mode = resolve_mode(args)?;
    let package = PackageInfo::load(&root)?;
    let site = ConfigDiscovery::new(&root).load_for_mode(mode)?;

    tracing::debug!(root = %root.display(), %mode, package = %package.name, "loaded project");
    Ok(Project {
        root,
        mode,
        package,
        site,
    })
}
