mod ledger;
mod register;
mod types;

#[cfg(test)]
mod tests;

pub use register::DecisionScope;
pub use types::{Progress, Stage, StageKind, StageStatus};
