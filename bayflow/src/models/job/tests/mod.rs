use rust_decimal::Decimal;

use crate::models::decision::Decision;
use crate::models::job::Job;
use crate::models::stage::{Stage, StageKind};
use crate::models::task::Task;

/// Three-stage job: a one-task intake, a service stage with an exclusive
/// package group, and an empty terminal stage.
fn create_test_job() -> Job {
    let intake = Stage::new(StageKind::Intake).with_task(Task::new("vehicle-details", "Vehicle"));
    let service = Stage::new(StageKind::Service)
        .with_task(Task::new("oil-change", "Oil Change").with_price(Decimal::from(45)))
        .with_decision(Decision::package("silver", "Silver", Decimal::from(80), "pkg"))
        .with_decision(Decision::package("gold", "Gold", Decimal::from(150), "pkg"));
    let history = Stage::new(StageKind::History);
    Job::from_stages("ABC-1234", "Sarah Johnson", vec![intake, service, history]).unwrap()
}
