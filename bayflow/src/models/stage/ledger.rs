//! Task ledger: checklist completion within a stage.

use crate::models::error::WorkflowError;
use crate::models::task::{PhotoRef, PhotoSlot, Task};

use super::types::{Progress, Stage};

impl Stage {
    /// Flip a task's completion flag and return the new value.
    ///
    /// # Errors
    /// `StageLocked` once the stage is finalized, `UnknownTask` if the id is
    /// not part of this stage.
    pub fn toggle_task(&mut self, task_id: &str) -> Result<bool, WorkflowError> {
        self.ensure_unlocked()?;
        let task = self.task_mut(task_id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Record an open QC issue against a task.
    pub fn flag_issue(&mut self, task_id: &str, note: String) -> Result<(), WorkflowError> {
        self.ensure_unlocked()?;
        self.task_mut(task_id)?.issue = Some(note);
        Ok(())
    }

    /// Close a task's open issue. Clearing a task without an issue is a no-op.
    pub fn clear_issue(&mut self, task_id: &str) -> Result<(), WorkflowError> {
        self.ensure_unlocked()?;
        self.task_mut(task_id)?.issue = None;
        Ok(())
    }

    /// Store a photo handle produced by the image store on a task.
    pub fn attach_photo(
        &mut self,
        task_id: &str,
        slot: PhotoSlot,
        photo: PhotoRef,
    ) -> Result<(), WorkflowError> {
        self.ensure_unlocked()?;
        self.task_mut(task_id)?.set_photo(slot, photo);
        Ok(())
    }

    /// True when every task is satisfied. Vacuously true without tasks.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(Task::is_satisfied)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.tasks.iter().filter(|t| t.is_satisfied()).count(),
            total: self.tasks.len(),
        }
    }

    /// Ids of tasks still blocking the gate, in checklist order.
    pub fn missing_tasks(&self) -> Vec<String> {
        self.tasks
            .iter()
            .filter(|t| !t.is_satisfied())
            .map(|t| t.id.clone())
            .collect()
    }

    /// Tasks carrying an open issue.
    pub fn open_issues(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.issue.is_some())
    }
}
