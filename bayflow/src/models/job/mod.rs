mod gate;
mod report;
mod routing;
mod types;

#[cfg(test)]
mod tests;

pub use report::{JobStatusReport, StageDetail, StageSummary};
pub use types::{Job, JobId};
