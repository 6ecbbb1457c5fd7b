//! Plan command implementation.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use sitepack_config::validate_fs;
use sitepack_plan::{
    assemble, run_plan, BuildPlan, PlanInputs, StageDescriptor, StageExecutionError, StageExecutor,
};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Executor that only records each stage. Used for `--dry-run`.
#[derive(Debug, Default)]
pub struct LoggingExecutor;

impl StageExecutor for LoggingExecutor {
    fn execute(
        &self,
        stage: &StageDescriptor,
        plan: &BuildPlan,
    ) -> std::result::Result<(), StageExecutionError> {
        tracing::info!(
            mode = %plan.mode,
            kind = %stage.kind,
            settings = stage.config.len(),
            "would run stage"
        );
        Ok(())
    }
}

/// Execute the plan command.
///
/// 1. Resolve the mode and load the project
/// 2. Check the required inputs exist
/// 3. Assemble and check ordering
/// 4. Optionally walk the plan through [`LoggingExecutor`]
/// 5. Print the plan as JSON, or write it to `--out`
pub fn execute(args: PlanArgs, cwd: Option<PathBuf>) -> Result<()> {
    let project = utils::load_project(cwd, &args.mode)?;
    let mode = project.mode;

    validate_fs(&project.site, &project.package, mode, &project.root)?;

    let inputs = PlanInputs {
        root: project.root,
        package: project.package,
        site: project.site,
        build_time: Local::now().naive_local(),
    };
    let plan = assemble(mode, &inputs);
    plan.check_ordering()?;

    ui::print_plan_summary(&plan);

    if args.dry_run {
        let report = run_plan(&plan, &LoggingExecutor)?;
        ui::print_run_report(&report);
    }

    let json = plan.to_json_pretty()?;
    match args.out {
        Some(out) => {
            let out = if out.is_absolute() {
                out
            } else {
                inputs.root.join(out)
            };
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(&out, json).with_path(&out)?;
            ui::success(&format!("Wrote {} plan to {}", mode, out.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
