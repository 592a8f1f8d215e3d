//! Host for many jobs.
//!
//! Each job sits behind its own lock. A command holds the job's write lock
//! for its whole validate, mutate, persist sequence and works on a draft, so
//! a rejected or unpersisted command leaves the stored job untouched and
//! readers never see a half-applied change. Different jobs never contend.
//!
//! With a repository attached, a command also claims the stored job and
//! reloads it before running, so a write from another process is never
//! overwritten by a stale in-memory copy.

mod commands;
mod queries;
mod repository;


use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Job, JobId, WorkflowError};

pub use queries::{DashboardSummary, PendingRepair, StageCount, VehicleHistoryEntry};
pub use repository::{JobClaim, JobRepository};

#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("Unknown job '{0}'")]
    UnknownJob(JobId),

    #[error("Job '{0}' already exists")]
    DuplicateJob(JobId),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("Failed to persist job: {0:#}")]
    Persistence(anyhow::Error),
}

type JobHandle = Arc<RwLock<Job>>;

#[derive(Default)]
pub struct Workshop {
    jobs: RwLock<HashMap<JobId, JobHandle>>,
    repository: Option<Box<dyn JobRepository>>,
}

impl Workshop {
    /// In-memory workshop with no persistence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Workshop backed by `repository`, loaded with every stored job.
    pub fn with_repository(repository: Box<dyn JobRepository>) -> Result<Self, WorkshopError> {
        let stored = repository.list_jobs().map_err(WorkshopError::Persistence)?;
        debug!(count = stored.len(), "loaded jobs");

        let jobs = stored
            .into_iter()
            .map(|job| (job.id().clone(), Arc::new(RwLock::new(job))))
            .collect();
        Ok(Self {
            jobs: RwLock::new(jobs),
            repository: Some(repository),
        })
    }

    fn handle(&self, id: &JobId) -> Result<JobHandle, WorkshopError> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| WorkshopError::UnknownJob(id.clone()))
    }

    fn persist(&self, job: &Job) -> Result<(), WorkshopError> {
        if let Some(repository) = &self.repository {
            repository.save_job(job).map_err(|err| {
                warn!(job_id = %job.id(), error = %format!("{err:#}"), "failed to persist job");
                WorkshopError::Persistence(err)
            })?;
        }
        Ok(())
    }

    /// Save a job that must not exist in storage yet.
    fn persist_new(&self, job: &Job) -> Result<(), WorkshopError> {
        let Some(repository) = &self.repository else {
            return Ok(());
        };

        let _claim = repository
            .claim_job(job.id())
            .map_err(WorkshopError::Persistence)?;
        let stored = repository
            .load_job(job.id())
            .map_err(WorkshopError::Persistence)?;
        if stored.is_some() {
            return Err(WorkshopError::DuplicateJob(job.id().clone()));
        }
        self.persist(job)
    }

    /// Claim the stored copy of `id` and replace `job` with it. The claim
    /// must be held until the changed job has been saved.
    fn reload(&self, id: &JobId, job: &mut Job) -> Result<Option<JobClaim>, WorkshopError> {
        let Some(repository) = &self.repository else {
            return Ok(None);
        };

        let claim = repository
            .claim_job(id)
            .map_err(WorkshopError::Persistence)?;
        match repository.load_job(id).map_err(WorkshopError::Persistence)? {
            Some(stored) => *job = stored,
            None => return Err(WorkshopError::UnknownJob(id.clone())),
        }
        Ok(Some(claim))
    }

    /// Run `command` against a draft of the freshest copy of the job and
    /// commit it only once it has succeeded and been persisted.
    fn apply<T>(
        &self,
        id: &JobId,
        name: &'static str,
        command: impl FnOnce(&mut Job) -> Result<T, WorkflowError>,
    ) -> Result<T, WorkshopError> {
        let handle = self.handle(id)?;
        let mut job = handle.write().unwrap_or_else(PoisonError::into_inner);
        let _claim = self.reload(id, &mut job)?;

        let mut draft = job.clone();
        let value = command(&mut draft).map_err(|err| {
            debug!(job_id = %id, command = name, error = %err, "command rejected");
            err
        })?;

        self.persist(&draft)?;
        *job = draft;
        Ok(value)
    }

    /// Run a read-only `query` under the job's read lock.
    fn read<T>(&self, id: &JobId, query: impl FnOnce(&Job) -> T) -> Result<T, WorkshopError> {
        let handle = self.handle(id)?;
        let job = handle.read().unwrap_or_else(PoisonError::into_inner);
        Ok(query(&job))
    }

    /// Every job's handle, in no particular order.
    fn handles(&self) -> Vec<JobHandle> {
        self.jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }
}
