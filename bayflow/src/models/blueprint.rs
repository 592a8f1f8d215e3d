//! The shop's standard stage blueprint.

use rust_decimal::Decimal;

use super::constants::DETAILING_PACKAGE_GROUP;
use super::decision::{Decision, Severity};
use super::stage::{Stage, StageKind};
use super::task::Task;

fn checklist(kind: StageKind, items: &[(&str, &str)]) -> Stage {
    items
        .iter()
        .fold(Stage::new(kind), |stage, (id, name)| {
            stage.with_task(Task::new(*id, *name))
        })
}

/// Stand-alone mechanical service: id, name, price, estimated minutes.
fn service_task(id: &str, name: &str, price: i64, minutes: u32) -> Task {
    Task::new(id, name)
        .with_price(Decimal::from(price))
        .with_estimate(minutes)
}

pub fn intake_stage() -> Stage {
    checklist(
        StageKind::Intake,
        &[
            ("customer-details", "Customer details recorded"),
            ("vehicle-details", "Vehicle details recorded"),
            ("photo-front", "Front view photo"),
            ("photo-back", "Back view photo"),
            ("photo-left", "Left side photo"),
            ("photo-right", "Right side photo"),
        ],
    )
}

pub fn inspection_stage() -> Stage {
    checklist(
        StageKind::Inspection,
        &[
            ("oil-level", "Oil level"),
            ("air-filter", "Air filter"),
            ("brake-condition", "Brake condition"),
            ("battery", "Battery"),
            ("tyres", "Tyres"),
            ("ac-cooling", "AC cooling"),
            ("paint-quality", "Paint quality"),
            ("interior-condition", "Interior dirt level and stains"),
            ("repair-issues", "Repair issues logged"),
        ],
    )
}

pub fn approval_stage() -> Stage {
    checklist(
        StageKind::Approval,
        &[
            ("quote-presented", "Quote presented to customer"),
            ("customer-sign-off", "Customer sign-off captured"),
        ],
    )
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
    .with_decision(Decision::package(
        "silver",
        "Silver Package - exterior wash, vacuum, tire shine",
        Decimal::from(80),
        DETAILING_PACKAGE_GROUP,
    ))
    .with_decision(Decision::package(
        "gold",
        "Gold Package - Silver plus interior detailing, dashboard polish, glass",
        Decimal::from(150),
        DETAILING_PACKAGE_GROUP,
    ))
    .with_decision(Decision::package(
        "ceramic",
        "Ceramic Coating - Gold plus ceramic coat, paint correction, swirl removal",
        Decimal::from(500),
        DETAILING_PACKAGE_GROUP,
    ))
}

pub fn job_card_stage() -> Stage {
    checklist(
        StageKind::JobCard,
        &[
            ("technician-assigned", "Technician assigned"),
            ("bay-assigned", "Service bay assigned"),
            ("delivery-time-set", "Expected delivery set"),
        ],
    )
}

pub fn service_stage() -> Stage {
    Stage::new(StageKind::Service)
        .with_task(service_task("oil-change", "Engine Oil Change", 45, 15))
        .with_task(service_task("oil-filter", "Oil Filter Replacement", 15, 10))
        .with_task(service_task("air-filter", "Air Filter Replacement", 25, 10))
        .with_task(service_task("brake-fluid", "Brake Fluid Top-up", 20, 10))
        .with_task(service_task("coolant-check", "Coolant Check", 0, 5))
        .with_task(service_task("tyre-pressure", "Tyre Pressure Check", 0, 5))
}

pub fn detailing_stage() -> Stage {
    checklist(
        StageKind::Detailing,
        &[
            ("foam-wash", "Foam Wash"),
            ("pressure-wash", "Pressure Wash"),
            ("drying", "Drying"),
            ("clay-bar", "Clay Bar Treatment"),
            ("polish", "Polish"),
            ("wax", "Wax Application"),
            ("ceramic-coat", "Ceramic Coat"),
            ("vacuum", "Vacuum"),
            ("dashboard-clean", "Dashboard Clean"),
            ("seat-cleaning", "Seat Cleaning"),
            ("mat-wash", "Mat Wash"),
            ("glass-cleaning", "Glass Cleaning"),
            ("perfume", "Perfume"),
        ],
    )
}

pub fn qc_stage() -> Stage {
    checklist(
        StageKind::Qc,
        &[
            ("service-steps-verified", "All service steps verified"),
            ("oil-level-confirmed", "Oil level confirmed"),
            ("filter-installation", "Filter installation verified"),
            ("brake-system", "Brake system checked"),
            ("detailing-reviewed", "All detailing steps reviewed"),
            ("exterior-finish", "Exterior finish quality"),
            ("interior-cleanliness", "Interior cleanliness"),
            ("photos-uploaded", "Before/After photos uploaded"),
            ("repairs-completed", "Repairs completed as specified"),
            ("test-drive", "Test drive completed"),
        ],
    )
}

pub fn billing_stage() -> Stage {
    checklist(
        StageKind::Billing,
        &[
            ("invoice-reviewed", "Invoice reviewed with customer"),
            ("payment-received", "Payment received"),
        ],
    )
}

/// All nine stages, Intake through History, in shop order.
pub fn standard_stages() -> Vec<Stage> {
    vec![
        intake_stage(),
        inspection_stage(),
        approval_stage(),
        job_card_stage(),
        service_stage(),
        detailing_stage(),
        qc_stage(),
        billing_stage(),
        Stage::new(StageKind::History),
    ]
}
