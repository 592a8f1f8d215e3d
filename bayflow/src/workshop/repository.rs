use anyhow::Result;

use crate::models::{Job, JobId};

/// Exclusive hold on one stored job, released on drop.
pub type JobClaim = Box<dyn Send>;

/// Durable storage for jobs.
///
/// The workflow core never calls this; the [`Workshop`](super::Workshop)
/// loads every job at startup and, for each command, claims the job,
/// reloads it, and saves it back before releasing the claim.
pub trait JobRepository: Send + Sync {
    /// `Ok(None)` when no job with `id` has been stored.
    fn load_job(&self, id: &JobId) -> Result<Option<Job>>;

    fn save_job(&self, job: &Job) -> Result<()>;

    /// Every readable job. Unreadable entries are skipped.
    fn list_jobs(&self) -> Result<Vec<Job>>;

    /// Block until no other writer, in this process or another, holds `id`.
    fn claim_job(&self, id: &JobId) -> Result<JobClaim>;
}
