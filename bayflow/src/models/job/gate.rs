//! Stage gate and the job's stage-index state machine.
//!
//! States are stage indices `0..N`. The only transitions are `advance`
//! (gated on the current stage) and `retreat`; the last stage is terminal.

use crate::models::error::WorkflowError;
use crate::models::stage::{Stage, StageKind, StageStatus};

use super::types::Job;

impl Job {
    pub fn current_stage_index(&self) -> usize {
        self.current_stage_index
    }

    pub fn current_stage(&self) -> &Stage {
        &self.stages[self.current_stage_index]
    }

    pub fn is_terminal(&self) -> bool {
        self.current_stage_index + 1 == self.stages.len()
    }

    /// True when `advance` would succeed right now.
    pub fn can_advance(&self) -> bool {
        let stage = self.current_stage();
        !self.is_terminal() && stage.is_complete() && stage.exclusive_choice_made()
    }

    /// Leave the current stage, finalizing it, and return the new stage.
    ///
    /// # Errors
    /// - `TerminalStage` when already at the last stage
    /// - `StageIncomplete` listing unfinished tasks and the exclusive group
    ///   members still awaiting a choice
    pub fn advance(&mut self) -> Result<StageKind, WorkflowError> {
        let stage = self.current_stage();
        if self.is_terminal() {
            return Err(WorkflowError::TerminalStage(stage.kind()));
        }

        let missing_tasks = stage.missing_tasks();
        let pending_decisions = stage.pending_decisions();
        if !missing_tasks.is_empty() || !pending_decisions.is_empty() {
            return Err(WorkflowError::StageIncomplete {
                stage: stage.kind(),
                missing_tasks,
                pending_decisions,
            });
        }

        self.stages[self.current_stage_index].finalize();
        self.current_stage_index += 1;
        self.touch();
        Ok(self.current_stage().kind())
    }

    /// Step back one stage. Task and decision state, including locks, is left
    /// untouched.
    pub fn retreat(&mut self) -> Result<StageKind, WorkflowError> {
        if self.current_stage_index == 0 {
            return Err(WorkflowError::AlreadyAtStart(self.current_stage().kind()));
        }
        self.current_stage_index -= 1;
        self.touch();
        Ok(self.current_stage().kind())
    }

    /// Status of the stage at `index` relative to the current stage.
    pub fn status(&self, index: usize) -> StageStatus {
        match index.cmp(&self.current_stage_index) {
            std::cmp::Ordering::Less => StageStatus::Completed,
            std::cmp::Ordering::Equal => StageStatus::Active,
            std::cmp::Ordering::Greater => StageStatus::Pending,
        }
    }

    /// Status of every stage, in order.
    pub fn statuses(&self) -> Vec<(StageKind, StageStatus)> {
        self.stages
            .iter()
            .enumerate()
            .map(|(i, stage)| (stage.kind(), self.status(i)))
            .collect()
    }
}
