//! Inbound commands. Every one is atomic per job.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use tracing::info;

use crate::models::{Choice, Job, JobId, PhotoRef, PhotoSlot, StageKind};

use super::{Workshop, WorkshopError};

impl Workshop {
    /// Open a job on the standard blueprint and return its id.
    pub fn create_job(
        &self,
        vehicle_ref: impl Into<String>,
        customer_ref: impl Into<String>,
    ) -> Result<JobId, WorkshopError> {
        self.insert_job(Job::new(vehicle_ref, customer_ref))
    }

    /// Register an already-built job, e.g. one made with
    /// [`Job::from_stages`].
    pub fn insert_job(&self, job: Job) -> Result<JobId, WorkshopError> {
        job.validate()?;

        let id = job.id().clone();
        let vehicle = job.vehicle_ref().to_string();
        let customer = job.customer_ref().to_string();
        let handle = Arc::new(RwLock::new(job));
        let guard = handle.write().unwrap_or_else(PoisonError::into_inner);

        // The map lock is released before the job is saved.
        {
            let mut jobs = self.jobs.write().unwrap_or_else(PoisonError::into_inner);
            if jobs.contains_key(&id) {
                return Err(WorkshopError::DuplicateJob(id));
            }
            jobs.insert(id.clone(), Arc::clone(&handle));
        }

        if let Err(err) = self.persist_new(&guard) {
            self.jobs
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id);
            return Err(err);
        }
        drop(guard);

        info!(job_id = %id, vehicle = %vehicle, customer = %customer, "job created");
        Ok(id)
    }

    /// Flip a task and return its new completion state.
    pub fn toggle_task(
        &self,
        id: &JobId,
        stage: StageKind,
        task_id: &str,
    ) -> Result<bool, WorkshopError> {
        self.apply(id, "toggle_task", |job| job.toggle_task(stage, task_id))
    }

    pub fn set_decision(
        &self,
        id: &JobId,
        stage: StageKind,
        decision_id: &str,
        choice: Choice,
    ) -> Result<(), WorkshopError> {
        self.apply(id, "set_decision", |job| {
            job.set_decision(stage, decision_id, choice)
        })
    }

    /// Move the job to its next stage and return that stage.
    pub fn advance_stage(&self, id: &JobId) -> Result<StageKind, WorkshopError> {
        let next = self.apply(id, "advance_stage", Job::advance)?;
        info!(job_id = %id, stage = %next, "stage advanced");
        Ok(next)
    }

    pub fn retreat_stage(&self, id: &JobId) -> Result<StageKind, WorkshopError> {
        let previous = self.apply(id, "retreat_stage", Job::retreat)?;
        info!(job_id = %id, stage = %previous, "stage retreated");
        Ok(previous)
    }

    pub fn set_discount(&self, id: &JobId, percent: Decimal) -> Result<(), WorkshopError> {
        self.apply(id, "set_discount", |job| job.set_discount(percent))?;
        info!(job_id = %id, percent = %percent, "discount set");
        Ok(())
    }

    pub fn flag_issue(
        &self,
        id: &JobId,
        stage: StageKind,
        task_id: &str,
        note: impl Into<String>,
    ) -> Result<(), WorkshopError> {
        let note = note.into();
        self.apply(id, "flag_issue", |job| job.flag_issue(stage, task_id, note))
    }

    pub fn clear_issue(
        &self,
        id: &JobId,
        stage: StageKind,
        task_id: &str,
    ) -> Result<(), WorkshopError> {
        self.apply(id, "clear_issue", |job| job.clear_issue(stage, task_id))
    }

    pub fn attach_photo(
        &self,
        id: &JobId,
        stage: StageKind,
        task_id: &str,
        slot: PhotoSlot,
        photo: PhotoRef,
    ) -> Result<(), WorkshopError> {
        self.apply(id, "attach_photo", |job| {
            job.attach_photo(stage, task_id, slot, photo)
        })
    }
}
