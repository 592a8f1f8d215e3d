//! Read-only views over a job for outbound queries.

use serde::Serialize;

use crate::models::decision::Decision;
use crate::models::error::WorkflowError;
use crate::models::stage::{Progress, StageKind, StageStatus};
use crate::models::task::Task;

use super::types::{Job, JobId};

/// One row of a job's status list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageSummary {
    pub stage: StageKind,
    pub status: StageStatus,
    pub progress: Progress,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobStatusReport {
    pub job_id: JobId,
    pub vehicle_ref: String,
    pub customer_ref: String,
    pub current_stage: StageKind,
    pub can_advance: bool,
    pub stages: Vec<StageSummary>,
}

/// Everything a caller needs to render one stage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageDetail {
    pub stage: StageKind,
    pub status: StageStatus,
    pub locked: bool,
    pub complete: bool,
    pub progress: Progress,
    pub tasks: Vec<Task>,
    pub decisions: Vec<Decision>,
    pub missing_tasks: Vec<String>,
    pub pending_decisions: Vec<String>,
}

impl Job {
    pub fn status_report(&self) -> JobStatusReport {
        let stages = self
            .stages
            .iter()
            .enumerate()
            .map(|(i, stage)| StageSummary {
                stage: stage.kind(),
                status: self.status(i),
                progress: stage.progress(),
                locked: stage.is_locked(),
            })
            .collect();

        JobStatusReport {
            job_id: self.id.clone(),
            vehicle_ref: self.vehicle_ref.clone(),
            customer_ref: self.customer_ref.clone(),
            current_stage: self.current_stage().kind(),
            can_advance: self.can_advance(),
            stages,
        }
    }

    /// Detail of one stage, with decisions ordered most severe first.
    pub fn stage_detail(&self, kind: StageKind) -> Result<StageDetail, WorkflowError> {
        let (index, stage) = self
            .stages
            .iter()
            .enumerate()
            .find(|(_, s)| s.kind() == kind)
            .ok_or(WorkflowError::UnknownStage(kind))?;

        let mut decisions = stage.decisions().to_vec();
        decisions.sort_by(|a, b| b.severity.cmp(&a.severity));

        Ok(StageDetail {
            stage: kind,
            status: self.status(index),
            locked: stage.is_locked(),
            complete: stage.is_complete() && stage.exclusive_choice_made(),
            progress: stage.progress(),
            tasks: stage.tasks().to_vec(),
            decisions,
            missing_tasks: stage.missing_tasks(),
            pending_decisions: stage.pending_decisions(),
        })
    }
}
