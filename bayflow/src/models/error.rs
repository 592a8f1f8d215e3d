use rust_decimal::Decimal;
use thiserror::Error;

use super::stage::StageKind;

/// Rejections produced by the workflow core.
///
/// Every variant is recoverable: the command that produced it left the job
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Unknown task '{task_id}' in stage {stage}")]
    UnknownTask { stage: StageKind, task_id: String },

    #[error("Unknown decision '{decision_id}' in stage {stage}")]
    UnknownDecision {
        stage: StageKind,
        decision_id: String,
    },

    #[error("Job has no {0} stage")]
    UnknownStage(StageKind),

    #[error("Stage {0} is finalized and can no longer be changed")]
    StageLocked(StageKind),

    #[error(
        "Stage {stage} is incomplete: {}",
        unmet_summary(.missing_tasks, .pending_decisions)
    )]
    StageIncomplete {
        stage: StageKind,
        missing_tasks: Vec<String>,
        pending_decisions: Vec<String>,
    },

    #[error("Stage {0} is the final stage; there is nothing to advance to")]
    TerminalStage(StageKind),

    #[error("Job is already at its first stage ({0})")]
    AlreadyAtStart(StageKind),

    #[error("Discount must be between 0 and 100 percent, got {0}")]
    InvalidDiscount(Decimal),

    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),
}

fn unmet_summary(missing_tasks: &[String], pending_decisions: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing_tasks.is_empty() {
        parts.push(format!("unfinished tasks [{}]", missing_tasks.join(", ")));
    }
    if !pending_decisions.is_empty() {
        parts.push(format!(
            "choose one of [{}]",
            pending_decisions.join(", ")
        ));
    }
    parts.join("; ")
}
