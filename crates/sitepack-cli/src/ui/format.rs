//! Formatting for durations, plans and run reports.

use owo_colors::Style;
use sitepack_plan::{BuildPlan, RunReport};
use std::time::Duration;

use super::messages::paint;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use sitepack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

fn summary_lines(plan: &BuildPlan) -> Vec<String> {
    let mut lines = vec![format!(
        "{} plan, {} stages, public path {}",
        plan.mode,
        plan.stages.len(),
        plan.output.public_path
    )];
    lines.extend(
        plan.stages
            .iter()
            .enumerate()
            .map(|(i, stage)| format!("{:>3}. {}", i + 1, stage.kind)),
    );
    lines
}

/// Print the stage list of `plan` to stderr.
pub fn print_plan_summary(plan: &BuildPlan) {
    let mut lines = summary_lines(plan).into_iter();
    if let Some(header) = lines.next() {
        eprintln!();
        eprintln!("{}", paint(&header, Style::new().bold()));
    }
    for line in lines {
        eprintln!("{}", paint(&line, Style::new().dimmed()));
    }
}

/// Print the outcome of a plan run to stderr.
pub fn print_run_report(report: &RunReport) {
    eprintln!(
        "{} {} stages in {}",
        paint("Ran", Style::new().green().bold()),
        report.executed.len(),
        format_duration(report.elapsed)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sitepack_config::{BuildMode, PackageInfo, SiteConfig};
    use sitepack_plan::{assemble, PlanInputs};

    #[test]
    fn summary_lists_every_stage() {
        let inputs = PlanInputs {
            root: "/project".into(),
            package: PackageInfo::new("shop", "1.0.0"),
            site: SiteConfig::default(),
            build_time: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };
        let plan = assemble(BuildMode::Development, &inputs);
        let lines = summary_lines(&plan);

        assert_eq!(lines.len(), plan.stages.len() + 1);
        assert!(lines[0].starts_with("development plan"));
        assert_eq!(lines[1], "  1. load-styles");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_secs(61)), "1m 1s");
    }
}
