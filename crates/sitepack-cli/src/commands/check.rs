//! Check command implementation.
//!
//! Validates configuration and required inputs without producing a plan.

use std::path::PathBuf;

use sitepack_config::validate_fs;
use sitepack_plan::PlanInputs;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Loads the project for the resolved mode, validates it against the
/// filesystem, then assembles the plan to confirm its stage ordering.
pub fn execute(args: CheckArgs, cwd: Option<PathBuf>) -> Result<()> {
    ui::info("Checking configuration...");

    let project = utils::load_project(cwd, &args.mode)?;
    let mode = project.mode;
    ui::success(&format!(
        "Loaded {} {} for {} mode",
        project.package.name, project.package.version, mode
    ));

    if let Err(err) = validate_fs(&project.site, &project.package, mode, &project.root) {
        ui::error(&err.to_string());
        return Err(err.into());
    }
    ui::success("Required inputs exist");

    let inputs = PlanInputs {
        root: project.root,
        package: project.package,
        site: project.site,
        build_time: chrono::Local::now().naive_local(),
    };
    let plan = sitepack_plan::assemble(mode, &inputs);
    plan.check_ordering()?;
    ui::success(&format!("Stage ordering holds for {} stages", plan.stages.len()));

    for mapping in &inputs.site.static_mappings {
        if !inputs.root.join(&mapping.from).is_dir() {
            ui::warning(&format!(
                "Static directory {} does not exist",
                mapping.from.display()
            ));
        }
    }

    ui::success("All checks passed!");
    Ok(())
}
