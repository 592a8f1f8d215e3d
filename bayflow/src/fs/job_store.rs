//! YAML job files under `.work/jobs/`, one per job card.
//!
//! Reads take a shared `fs2` lock and writes an exclusive one, so a second
//! `bayflow` process never sees a half-written job. A command's whole
//! load, change, save sequence additionally holds `{id}.lock`.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::{Job, JobId};
use crate::validation::validate_id;
use crate::workshop::{JobClaim, JobRepository};

pub struct YamlJobStore {
    jobs_dir: PathBuf,
}

impl YamlJobStore {
    pub fn new<P: Into<PathBuf>>(jobs_dir: P) -> Self {
        Self {
            jobs_dir: jobs_dir.into(),
        }
    }

    pub fn job_path(&self, id: &JobId) -> Result<PathBuf> {
        validate_id(id.as_str())?;
        Ok(self.jobs_dir.join(format!("{id}.yaml")))
    }

    pub fn lock_path(&self, id: &JobId) -> Result<PathBuf> {
        validate_id(id.as_str())?;
        Ok(self.jobs_dir.join(format!("{id}.lock")))
    }

    fn read_job(path: &Path) -> Result<Job> {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        file.lock_shared()
            .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let job: Job = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse job file {}", path.display()))?;
        job.validate()
            .with_context(|| format!("Invalid job file {}", path.display()))?;
        Ok(job)
    }
}

impl JobRepository for YamlJobStore {
    fn load_job(&self, id: &JobId) -> Result<Option<Job>> {
        let path = self.job_path(id)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read_job(&path).map(Some)
    }

    fn save_job(&self, job: &Job) -> Result<()> {
        let path = self.job_path(job.id())?;
        let content = serde_yaml::to_string(job)
            .with_context(|| format!("Failed to serialize job {}", job.id()))?;

        fs::create_dir_all(&self.jobs_dir)
            .with_context(|| format!("Failed to create {}", self.jobs_dir.display()))?;

        // Truncate only once the exclusive lock is held.
        #[allow(clippy::suspicious_open_options)]
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
        file.set_len(0)
            .with_context(|| format!("Failed to truncate {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        file.flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        Ok(())
    }

    fn list_jobs(&self) -> Result<Vec<Job>> {
        if !self.jobs_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.jobs_dir)
            .with_context(|| format!("Failed to read {}", self.jobs_dir.display()))?;
        let mut jobs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }
            match Self::read_job(&path) {
                Ok(job) => jobs.push(job),
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %format!("{err:#}"),
                        "skipping unreadable job file"
                    );
                }
            }
        }
        jobs.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(jobs)
    }

    fn claim_job(&self, id: &JobId) -> Result<JobClaim> {
        let path = self.lock_path(id)?;
        fs::create_dir_all(&self.jobs_dir)
            .with_context(|| format!("Failed to create {}", self.jobs_dir.display()))?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
        Ok(Box::new(file))
    }
}
