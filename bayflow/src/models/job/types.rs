use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::blueprint::standard_stages;
use crate::models::constants::JOB_ID_PREFIX;
use crate::models::error::WorkflowError;
use crate::models::invoice::validate_discount;
use crate::models::stage::{Stage, StageKind};

/// Job card number, e.g. `JC-1f0c9a2e`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(format!("{JOB_ID_PREFIX}-{}", &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vehicle's path through the shop.
///
/// The stage list is fixed at creation. `current_stage_index` only moves
/// through [`Job::advance`] and [`Job::retreat`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub(super) id: JobId,
    pub(super) vehicle_ref: String,
    pub(super) customer_ref: String,
    pub(super) stages: Vec<Stage>,
    #[serde(default)]
    pub(super) current_stage_index: usize,
    #[serde(default)]
    pub(super) discount_percent: Decimal,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a job on the shop's standard nine-stage blueprint.
    pub fn new(vehicle_ref: impl Into<String>, customer_ref: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::generate(),
            vehicle_ref: vehicle_ref.into(),
            customer_ref: customer_ref.into(),
            stages: standard_stages(),
            current_stage_index: 0,
            discount_percent: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a job from a custom ordered stage list.
    ///
    /// # Errors
    /// `InvalidBlueprint` for an empty list, a repeated stage kind, or a
    /// stage that fails [`Stage::validate`].
    pub fn from_stages(
        vehicle_ref: impl Into<String>,
        customer_ref: impl Into<String>,
        stages: Vec<Stage>,
    ) -> Result<Self, WorkflowError> {
        validate_stages(&stages)?;

        let mut job = Self::new(vehicle_ref, customer_ref);
        job.stages = stages;
        Ok(job)
    }

    /// Check a job read back from storage before it is used.
    ///
    /// Every stage before the current one must be finalized, and no stage may
    /// carry more than one approved option of its exclusive group.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        validate_stages(&self.stages)?;
        if self.current_stage_index >= self.stages.len() {
            return Err(WorkflowError::InvalidBlueprint(format!(
                "current stage index {} is out of range for {} stages",
                self.current_stage_index,
                self.stages.len()
            )));
        }
        if let Some(open) = self.stages[..self.current_stage_index]
            .iter()
            .find(|s| !s.is_locked())
        {
            return Err(WorkflowError::InvalidBlueprint(format!(
                "stage {} is behind the current stage but not finalized",
                open.kind()
            )));
        }
        validate_discount(self.discount_percent)?;
        Ok(())
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn vehicle_ref(&self) -> &str {
        &self.vehicle_ref
    }

    pub fn customer_ref(&self) -> &str {
        &self.customer_ref
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.iter().find(|s| s.kind() == kind)
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(super) fn stage_mut(&mut self, kind: StageKind) -> Result<&mut Stage, WorkflowError> {
        self.stages
            .iter_mut()
            .find(|s| s.kind() == kind)
            .ok_or(WorkflowError::UnknownStage(kind))
    }

    pub(super) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_stages(stages: &[Stage]) -> Result<(), WorkflowError> {
    if stages.is_empty() {
        return Err(WorkflowError::InvalidBlueprint(
            "a job needs at least one stage".to_string(),
        ));
    }
    for (i, stage) in stages.iter().enumerate() {
        if stages[..i].iter().any(|s| s.kind() == stage.kind()) {
            return Err(WorkflowError::InvalidBlueprint(format!(
                "stage {} appears more than once",
                stage.kind()
            )));
        }
        stage.validate()?;
    }
    Ok(())
}
