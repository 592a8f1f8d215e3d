//! End-to-end stage gating on the standard blueprint

use rust_decimal::Decimal;

use bayflow::models::{Choice, StageKind, StageStatus, WorkflowError};
use bayflow::workshop::{Workshop, WorkshopError};

use super::helpers::{complete_current_stage, walk_to};

#[test]
fn test_full_visit_reaches_history() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();

    walk_to(&workshop, &id, StageKind::History);

    let status = workshop.job_status(&id).unwrap();
    assert!(!status.can_advance);
    assert!(status
        .stages
        .iter()
        .take(StageKind::ALL.len() - 1)
        .all(|s| s.status == StageStatus::Completed && s.locked));
    assert!(matches!(
        workshop.advance_stage(&id),
        Err(WorkshopError::Workflow(WorkflowError::TerminalStage(
            StageKind::History
        )))
    ));
}

#[test]
fn test_approval_requires_a_package_choice() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();
    walk_to(&workshop, &id, StageKind::Approval);
    complete_current_stage(&workshop, &id);

    match workshop.advance_stage(&id) {
        Err(WorkshopError::Workflow(WorkflowError::StageIncomplete {
            stage,
            missing_tasks,
            pending_decisions,
        })) => {
            assert_eq!(stage, StageKind::Approval);
            assert!(missing_tasks.is_empty());
            assert_eq!(pending_decisions, vec!["silver", "gold", "ceramic"]);
        }
        other => panic!("expected StageIncomplete, got {other:?}"),
    }

    workshop
        .set_decision(&id, StageKind::Approval, "ceramic", Choice::Approve)
        .unwrap();
    assert_eq!(workshop.advance_stage(&id).unwrap(), StageKind::JobCard);
}

#[test]
fn test_switching_packages_keeps_one_approved() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();

    for package in ["silver", "gold", "ceramic", "gold"] {
        workshop
            .set_decision(&id, StageKind::Approval, package, Choice::Approve)
            .unwrap();
    }

    let detail = workshop.stage_detail(&id, StageKind::Approval).unwrap();
    let approved: Vec<&str> = detail
        .decisions
        .iter()
        .filter(|d| d.group.is_some() && d.choice == Choice::Approve)
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(approved, vec!["gold"]);
    assert_eq!(workshop.invoice(&id).unwrap().subtotal, Decimal::from(150));
}

#[test]
fn test_qc_issue_blocks_until_cleared() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();
    walk_to(&workshop, &id, StageKind::Qc);
    complete_current_stage(&workshop, &id);

    workshop
        .flag_issue(&id, StageKind::Qc, "exterior-finish", "Swirl marks on bonnet")
        .unwrap();
    assert!(!workshop.job_status(&id).unwrap().can_advance);
    assert!(workshop.advance_stage(&id).is_err());

    workshop
        .clear_issue(&id, StageKind::Qc, "exterior-finish")
        .unwrap();
    assert_eq!(workshop.advance_stage(&id).unwrap(), StageKind::Billing);
}

#[test]
fn test_billing_invoice_with_discount() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();
    walk_to(&workshop, &id, StageKind::Billing);
    workshop.set_discount(&id, Decimal::from(10)).unwrap();

    // services 105 + gold 150 + brake pads 200 = 455
    let invoice = workshop.invoice(&id).unwrap();
    assert_eq!(invoice.subtotal, Decimal::from(455));
    assert_eq!(invoice.discount_amount, Decimal::new(4550, 2));
    assert_eq!(invoice.taxable_amount, Decimal::new(40950, 2));
    assert_eq!(invoice.tax, Decimal::new(6143, 2));
    assert_eq!(invoice.total, Decimal::new(47093, 2));

    complete_current_stage(&workshop, &id);
    workshop.advance_stage(&id).unwrap();
    assert!(matches!(
        workshop.set_discount(&id, Decimal::from(20)),
        Err(WorkshopError::Workflow(WorkflowError::StageLocked(
            StageKind::Billing
        )))
    ));
    assert_eq!(workshop.invoice(&id).unwrap(), invoice);
}

#[test]
fn test_back_and_forward_is_free() {
    let workshop = Workshop::new();
    let id = workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();
    walk_to(&workshop, &id, StageKind::Service);
    let before = workshop.snapshot(&id).unwrap();

    assert_eq!(workshop.retreat_stage(&id).unwrap(), StageKind::JobCard);
    assert_eq!(workshop.retreat_stage(&id).unwrap(), StageKind::Approval);
    assert_eq!(workshop.advance_stage(&id).unwrap(), StageKind::JobCard);
    assert_eq!(workshop.advance_stage(&id).unwrap(), StageKind::Service);

    let after = workshop.snapshot(&id).unwrap();
    assert_eq!(after.stages(), before.stages());
    assert_eq!(after.current_stage_index(), before.current_stage_index());
}
