//! Job-level commands routed to the owning stage.

use rust_decimal::Decimal;

use crate::models::decision::Choice;
use crate::models::error::WorkflowError;
use crate::models::invoice::{compute_invoice, validate_discount, Invoice};
use crate::models::stage::StageKind;
use crate::models::task::{PhotoRef, PhotoSlot};

use super::types::Job;

impl Job {
    pub fn toggle_task(&mut self, stage: StageKind, task_id: &str) -> Result<bool, WorkflowError> {
        let completed = self.stage_mut(stage)?.toggle_task(task_id)?;
        self.touch();
        Ok(completed)
    }

    pub fn set_decision(
        &mut self,
        stage: StageKind,
        decision_id: &str,
        choice: Choice,
    ) -> Result<(), WorkflowError> {
        self.stage_mut(stage)?.set_choice(decision_id, choice)?;
        self.touch();
        Ok(())
    }

    pub fn flag_issue(
        &mut self,
        stage: StageKind,
        task_id: &str,
        note: String,
    ) -> Result<(), WorkflowError> {
        self.stage_mut(stage)?.flag_issue(task_id, note)?;
        self.touch();
        Ok(())
    }

    pub fn clear_issue(&mut self, stage: StageKind, task_id: &str) -> Result<(), WorkflowError> {
        self.stage_mut(stage)?.clear_issue(task_id)?;
        self.touch();
        Ok(())
    }

    pub fn attach_photo(
        &mut self,
        stage: StageKind,
        task_id: &str,
        slot: PhotoSlot,
        photo: PhotoRef,
    ) -> Result<(), WorkflowError> {
        self.stage_mut(stage)?.attach_photo(task_id, slot, photo)?;
        self.touch();
        Ok(())
    }

    /// Store the discount applied to this job's invoice.
    ///
    /// # Errors
    /// `InvalidDiscount` outside `[0, 100]`; `StageLocked` once billing has
    /// been finalized.
    pub fn set_discount(&mut self, percent: Decimal) -> Result<(), WorkflowError> {
        let percent = validate_discount(percent)?;
        if let Some(billing) = self.stage(StageKind::Billing) {
            billing.ensure_unlocked()?;
        }
        self.discount_percent = percent;
        self.touch();
        Ok(())
    }

    /// Invoice at the stored discount.
    pub fn invoice(&self) -> Result<Invoice, WorkflowError> {
        compute_invoice(self, self.discount_percent)
    }
}
