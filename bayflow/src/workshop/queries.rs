//! Outbound queries. Each returns an owned snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::PoisonError;

use crate::models::{
    Decision, Invoice, Job, JobId, JobStatusReport, StageDetail, StageKind,
};

use super::{Workshop, WorkshopError};

/// One past or current visit of a vehicle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleHistoryEntry {
    pub job_id: JobId,
    pub customer_ref: String,
    pub current_stage: StageKind,
    pub created_at: DateTime<Utc>,
    pub total: Decimal,
}

/// A repair the customer chose to postpone, still owed to the vehicle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PendingRepair {
    pub job_id: JobId,
    pub stage: StageKind,
    pub decision: Decision,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageCount {
    pub stage: StageKind,
    pub jobs: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub total_jobs: usize,
    /// Jobs whose current stage could be advanced right now
    pub ready_to_advance: usize,
    /// Jobs at their final stage
    pub delivered: usize,
    /// Postponed repairs across all jobs
    pub pending_repairs: usize,
    /// One row per stage kind in shop order, zero counts included
    pub by_stage: Vec<StageCount>,
}

impl Workshop {
    pub fn job_status(&self, id: &JobId) -> Result<JobStatusReport, WorkshopError> {
        self.read(id, Job::status_report)
    }

    /// Invoice at the job's stored discount.
    pub fn invoice(&self, id: &JobId) -> Result<Invoice, WorkshopError> {
        Ok(self.read(id, Job::invoice)??)
    }

    pub fn stage_detail(&self, id: &JobId, stage: StageKind) -> Result<StageDetail, WorkshopError> {
        Ok(self.read(id, |job| job.stage_detail(stage))??)
    }

    /// Consistent copy of the whole job.
    pub fn snapshot(&self, id: &JobId) -> Result<Job, WorkshopError> {
        self.read(id, Job::clone)
    }

    /// Copies of every job, oldest first.
    pub fn snapshots(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .handles()
            .iter()
            .map(|handle| handle.read().unwrap_or_else(PoisonError::into_inner).clone())
            .collect();
        jobs.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        jobs
    }

    pub fn job_ids(&self) -> Vec<JobId> {
        let mut ids: Vec<JobId> = self
            .jobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    fn jobs_for_vehicle(&self, vehicle_ref: &str) -> Vec<Job> {
        self.snapshots()
            .into_iter()
            .filter(|job| job.vehicle_ref().eq_ignore_ascii_case(vehicle_ref))
            .collect()
    }

    /// Every job for `vehicle_ref` (case-insensitive), oldest first.
    pub fn vehicle_history(
        &self,
        vehicle_ref: &str,
    ) -> Result<Vec<VehicleHistoryEntry>, WorkshopError> {
        self.jobs_for_vehicle(vehicle_ref)
            .into_iter()
            .map(|job| -> Result<VehicleHistoryEntry, WorkshopError> {
                Ok(VehicleHistoryEntry {
                    total: job.invoice()?.total,
                    job_id: job.id().clone(),
                    customer_ref: job.customer_ref().to_string(),
                    current_stage: job.current_stage().kind(),
                    created_at: job.created_at(),
                })
            })
            .collect()
    }

    /// Postponed repairs across every job of `vehicle_ref`.
    pub fn pending_repairs(&self, vehicle_ref: &str) -> Vec<PendingRepair> {
        postponed_repairs(&self.jobs_for_vehicle(vehicle_ref))
    }

    pub fn dashboard(&self) -> DashboardSummary {
        let jobs = self.snapshots();
        let by_stage = StageKind::ALL
            .iter()
            .map(|&stage| StageCount {
                stage,
                jobs: jobs
                    .iter()
                    .filter(|job| job.current_stage().kind() == stage)
                    .count(),
            })
            .collect();

        DashboardSummary {
            total_jobs: jobs.len(),
            ready_to_advance: jobs.iter().filter(|job| job.can_advance()).count(),
            delivered: jobs.iter().filter(|job| job.is_terminal()).count(),
            pending_repairs: postponed_repairs(&jobs).len(),
            by_stage,
        }
    }
}

/// Postponed members of an exclusive group are alternatives the customer
/// passed on, not repairs, and are left out.
fn postponed_repairs(jobs: &[Job]) -> Vec<PendingRepair> {
    jobs.iter()
        .flat_map(|job| {
            job.stages().iter().flat_map(move |stage| {
                stage
                    .postponed_decisions()
                    .filter(|decision| decision.group.is_none())
                    .map(move |decision| PendingRepair {
                        job_id: job.id().clone(),
                        stage: stage.kind(),
                        decision: decision.clone(),
                    })
            })
        })
        .collect()
}
