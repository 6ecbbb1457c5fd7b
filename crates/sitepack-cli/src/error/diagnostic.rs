//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use sitepack_config::ConfigError;
use sitepack_plan::PlanError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Plan(PlanError::StageFailed {
            index,
            kind,
            source,
        }) => miette::miette!(
            help = "No later stage ran; fix the failure and rerun the build",
            "Stage #{} '{}' failed: {}",
            index,
            kind,
            source
        ),
        CliError::Route(e) => miette::miette!(
            help = "Every route must render a <body> containing the application root element",
            "{}: {}",
            e,
            e.source
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        ConfigError::UnrecognizedMode { .. } => miette::miette!(
            help = "Pass --mode development|production|upload or drop --strict-mode to fall back",
            "Configuration error: {}",
            err
        ),
        e if e.is_missing_input() => miette::miette!(
            help = "These files must exist before any stage runs",
            "Configuration error: {}",
            err
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
