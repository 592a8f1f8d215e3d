use rust_decimal::Decimal;

use crate::models::decision::{Decision, Severity};
use crate::models::stage::{Stage, StageKind};
use crate::models::task::Task;

fn create_service_stage() -> Stage {
    Stage::new(StageKind::Service)
        .with_task(Task::new("oil-change", "Oil Change").with_price(Decimal::from(45)))
        .with_task(Task::new("oil-filter", "Oil Filter").with_price(Decimal::from(15)))
}

fn create_approval_stage() -> Stage {
    Stage::new(StageKind::Approval)
        .with_decision(Decision::repair(
            "brake-pads",
            "Brake pads worn - Front axle",
            Decimal::from(120),
            Decimal::from(80),
            Severity::High,
        ))
        .with_decision(Decision::repair(
            "ac-filter",
            "AC filter replacement",
            Decimal::from(35),
            Decimal::from(25),
            Severity::Medium,
        ))
        .with_decision(Decision::package("silver", "Silver Package", Decimal::from(80), "pkg"))
        .with_decision(Decision::package("gold", "Gold Package", Decimal::from(150), "pkg"))
        .with_decision(Decision::package("ceramic", "Ceramic Coating", Decimal::from(500), "pkg"))
}

mod register;
