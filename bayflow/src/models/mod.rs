pub mod blueprint;
pub mod constants;
pub mod decision;
pub mod error;
pub mod invoice;
pub mod job;
pub mod stage;
pub mod task;

pub use decision::{Choice, Decision, DecisionCost, Severity};
pub use error::WorkflowError;
pub use invoice::{compute_invoice, Invoice, LineItem, LineKind};
pub use job::{Job, JobId, JobStatusReport, StageDetail, StageSummary};
pub use stage::{DecisionScope, Progress, Stage, StageKind, StageStatus};
pub use task::{PhotoRef, PhotoSlot, Task};
