//! Running a plan through whatever actually performs the stages.

use std::time::{Duration, Instant};

use crate::error::{PlanError, Result, StageExecutionError};
use crate::plan::BuildPlan;
use crate::stage::{StageDescriptor, StageKind};

/// Performs one stage. Implemented by the bundler integration.
pub trait StageExecutor {
    fn execute(
        &self,
        stage: &StageDescriptor,
        plan: &BuildPlan,
    ) -> std::result::Result<(), StageExecutionError>;
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub executed: Vec<StageKind>,
    pub elapsed: Duration,
}

/// Execute every stage in order.
///
/// The ordering invariants are checked first. The run stops at the first
/// failing stage; nothing is retried.
pub fn run_plan(plan: &BuildPlan, executor: &dyn StageExecutor) -> Result<RunReport> {
    plan.check_ordering()?;

    let start = Instant::now();
    let mut executed = Vec::with_capacity(plan.stages.len());

    for (index, stage) in plan.stages.iter().enumerate() {
        let _span = tracing::info_span!("stage", index, kind = %stage.kind).entered();
        tracing::debug!("executing stage");

        if let Err(source) = executor.execute(stage, plan) {
            tracing::error!(error = %source, "stage failed");
            return Err(PlanError::StageFailed {
                index,
                kind: stage.kind,
                source,
            });
        }
        executed.push(stage.kind);
    }

    Ok(RunReport {
        executed,
        elapsed: start.elapsed(),
    })
}
