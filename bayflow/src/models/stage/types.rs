use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::decision::Decision;
use crate::models::error::WorkflowError;
use crate::models::task::Task;

/// The phases a vehicle passes through, in shop order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    Intake,
    Inspection,
    Approval,
    JobCard,
    Service,
    Detailing,
    Qc,
    Billing,
    History,
}

impl StageKind {
    pub const ALL: [StageKind; 9] = [
        StageKind::Intake,
        StageKind::Inspection,
        StageKind::Approval,
        StageKind::JobCard,
        StageKind::Service,
        StageKind::Detailing,
        StageKind::Qc,
        StageKind::Billing,
        StageKind::History,
    ];

    /// Identifier used on the command line and in stored files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Intake => "intake",
            StageKind::Inspection => "inspection",
            StageKind::Approval => "approval",
            StageKind::JobCard => "job-card",
            StageKind::Service => "service",
            StageKind::Detailing => "detailing",
            StageKind::Qc => "qc",
            StageKind::Billing => "billing",
            StageKind::History => "history",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageKind::Intake => write!(f, "Intake"),
            StageKind::Inspection => write!(f, "Inspection"),
            StageKind::Approval => write!(f, "Approval"),
            StageKind::JobCard => write!(f, "Job Card"),
            StageKind::Service => write!(f, "Service"),
            StageKind::Detailing => write!(f, "Detailing"),
            StageKind::Qc => write!(f, "QC"),
            StageKind::Billing => write!(f, "Billing"),
            StageKind::History => write!(f, "History"),
        }
    }
}

impl std::str::FromStr for StageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        StageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = StageKind::ALL.iter().map(|k| k.as_str()).collect();
                anyhow::anyhow!("Invalid stage: {s}. Valid values: {}", valid.join(", "))
            })
    }
}

/// Position of a stage relative to the job's current stage.
///
/// Derived on every read from the current stage index; never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Active,
    Pending,
}

impl StageStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            StageStatus::Completed => "✓",
            StageStatus::Active => "●",
            StageStatus::Pending => "○",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Active => write!(f, "active"),
            StageStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Checklist progress of a stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_full(&self) -> bool {
        self.completed == self.total
    }

    /// Whole percent, 100 for a stage without tasks.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.completed * 100 / self.total
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// One phase of a job: its checklist, its decisions, and whether it has
/// been finalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    pub(super) kind: StageKind,
    #[serde(default)]
    pub(super) tasks: Vec<Task>,
    #[serde(default)]
    pub(super) decisions: Vec<Decision>,
    #[serde(default)]
    pub(super) locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) finalized_at: Option<DateTime<Utc>>,
}

impl Stage {
    pub fn new(kind: StageKind) -> Self {
        Self {
            kind,
            tasks: Vec::new(),
            decisions: Vec::new(),
            locked: false,
            finalized_at: None,
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_decision(mut self, decision: Decision) -> Self {
        self.decisions.push(decision);
        self
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn decision(&self, decision_id: &str) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == decision_id)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized_at
    }

    /// Freeze the stage. Re-finalizing keeps the original timestamp.
    pub(crate) fn finalize(&mut self) {
        if !self.locked {
            self.locked = true;
            self.finalized_at = Some(Utc::now());
        }
    }

    pub(crate) fn ensure_unlocked(&self) -> Result<(), WorkflowError> {
        if self.locked {
            return Err(WorkflowError::StageLocked(self.kind));
        }
        Ok(())
    }

    pub(crate) fn task_mut(&mut self, task_id: &str) -> Result<&mut Task, WorkflowError> {
        let kind = self.kind;
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| WorkflowError::UnknownTask {
                stage: kind,
                task_id: task_id.to_string(),
            })
    }

    pub(crate) fn decision_index(&self, decision_id: &str) -> Result<usize, WorkflowError> {
        self.decisions
            .iter()
            .position(|d| d.id == decision_id)
            .ok_or_else(|| WorkflowError::UnknownDecision {
                stage: self.kind,
                decision_id: decision_id.to_string(),
            })
    }

    pub(crate) fn decisions_mut(&mut self) -> &mut [Decision] {
        &mut self.decisions
    }

    /// Check the structural rules a stage definition must satisfy.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        for (i, task) in self.tasks.iter().enumerate() {
            if self.tasks[..i].iter().any(|t| t.id == task.id) {
                return Err(WorkflowError::InvalidBlueprint(format!(
                    "duplicate task '{}' in stage {}",
                    task.id, self.kind
                )));
            }
            if task.price.is_some_and(|p| p.is_sign_negative()) {
                return Err(WorkflowError::InvalidBlueprint(format!("task '{}' has a negative price", task.id)));
            }
        }

        let mut groups: Vec<&str> = Vec::new();
        for (i, decision) in self.decisions.iter().enumerate() {
            if self.decisions[..i].iter().any(|d| d.id == decision.id) {
                return Err(WorkflowError::InvalidBlueprint(format!(
                    "duplicate decision '{}' in stage {}",
                    decision.id, self.kind
                )));
            }
            if decision.cost.is_negative() {
                return Err(WorkflowError::InvalidBlueprint(format!(
                    "decision '{}' has a negative cost",
                    decision.id
                )));
            }
            if let Some(group) = decision.group.as_deref() {
                if !groups.contains(&group) {
                    groups.push(group);
                }
            }
        }

        if groups.len() > 1 {
            return Err(WorkflowError::InvalidBlueprint(format!(
                "stage {} has more than one exclusive group ({})",
                self.kind,
                groups.join(", ")
            )));
        }

        let approved: Vec<&str> = self
            .exclusive_members()
            .filter(|d| d.is_approved())
            .map(|d| d.id.as_str())
            .collect();
        if approved.len() > 1 {
            return Err(WorkflowError::InvalidBlueprint(format!(
                "stage {} has more than one approved option ({})",
                self.kind,
                approved.join(", ")
            )));
        }

        Ok(())
    }
}
