use rust_decimal::Decimal;

use crate::models::decision::Choice;
use crate::models::error::WorkflowError;
use crate::models::stage::{DecisionScope, Stage, StageKind};

use super::{create_approval_stage, create_service_stage};

fn choice_of(stage: &Stage, id: &str) -> Choice {
    stage.decision(id).unwrap().choice
}

#[test]
fn test_set_choice_on_repair() {
    let mut stage = create_approval_stage();
    stage.set_choice("brake-pads", Choice::Approve).unwrap();
    stage.set_choice("ac-filter", Choice::Postpone).unwrap();

    assert_eq!(choice_of(&stage, "brake-pads"), Choice::Approve);
    assert_eq!(choice_of(&stage, "ac-filter"), Choice::Postpone);
}

#[test]
fn test_repairs_are_not_mutually_exclusive() {
    let mut stage = create_approval_stage();
    stage.set_choice("brake-pads", Choice::Approve).unwrap();
    stage.set_choice("ac-filter", Choice::Approve).unwrap();

    assert_eq!(choice_of(&stage, "brake-pads"), Choice::Approve);
    assert_eq!(choice_of(&stage, "ac-filter"), Choice::Approve);
}

#[test]
fn test_approving_package_postpones_siblings() {
    let mut stage = create_approval_stage();
    stage.set_choice("gold", Choice::Approve).unwrap();

    assert_eq!(choice_of(&stage, "gold"), Choice::Approve);
    assert_eq!(choice_of(&stage, "silver"), Choice::Postpone);
    assert_eq!(choice_of(&stage, "ceramic"), Choice::Postpone);

    stage.set_choice("silver", Choice::Approve).unwrap();
    assert_eq!(choice_of(&stage, "gold"), Choice::Postpone);
    assert_eq!(choice_of(&stage, "silver"), Choice::Approve);
    assert_eq!(choice_of(&stage, "ceramic"), Choice::Postpone);
}

#[test]
fn test_exclusive_group_never_has_two_approvals() {
    let mut stage = create_approval_stage();
    let sequence = [
        ("silver", Choice::Approve),
        ("ceramic", Choice::Approve),
        ("ceramic", Choice::Postpone),
        ("gold", Choice::Approve),
        ("silver", Choice::Unset),
        ("silver", Choice::Approve),
        ("gold", Choice::Approve),
    ];

    for (id, choice) in sequence {
        stage.set_choice(id, choice).unwrap();
        let approved = stage.exclusive_members().filter(|d| d.is_approved()).count();
        assert!(approved <= 1, "after {id} -> {choice}: {approved} approved");
    }
    assert_eq!(stage.selected_option().unwrap().id, "gold");
}

#[test]
fn test_package_choice_leaves_repairs_alone() {
    let mut stage = create_approval_stage();
    stage.set_choice("brake-pads", Choice::Approve).unwrap();
    stage.set_choice("gold", Choice::Approve).unwrap();

    assert_eq!(choice_of(&stage, "brake-pads"), Choice::Approve);
    assert_eq!(choice_of(&stage, "ac-filter"), Choice::Unset);
}

#[test]
fn test_postponing_the_selected_package_leaves_group_unchosen() {
    let mut stage = create_approval_stage();
    stage.set_choice("gold", Choice::Approve).unwrap();
    assert!(stage.exclusive_choice_made());

    stage.set_choice("gold", Choice::Postpone).unwrap();
    assert!(!stage.exclusive_choice_made());
    assert_eq!(stage.pending_decisions(), vec!["silver", "gold", "ceramic"]);
}

#[test]
fn test_unknown_decision_fails() {
    let mut stage = create_approval_stage();
    assert_eq!(
        stage.set_choice("platinum", Choice::Approve),
        Err(WorkflowError::UnknownDecision {
            stage: StageKind::Approval,
            decision_id: "platinum".to_string(),
        })
    );
}

#[test]
fn test_set_choice_on_locked_stage_fails_and_changes_nothing() {
    let mut stage = create_approval_stage();
    stage.set_choice("silver", Choice::Approve).unwrap();
    stage.finalize();
    let before = stage.clone();

    assert_eq!(
        stage.set_choice("gold", Choice::Approve),
        Err(WorkflowError::StageLocked(StageKind::Approval))
    );
    assert_eq!(stage, before);
}

#[test]
fn test_pending_decisions_empty_without_exclusive_group() {
    let stage = create_service_stage();
    assert_eq!(stage.exclusive_group(), None);
    assert!(stage.exclusive_choice_made());
    assert!(stage.pending_decisions().is_empty());
}

#[test]
fn test_approved_total_by_scope() {
    let mut stage = create_approval_stage();
    stage.set_choice("brake-pads", Choice::Approve).unwrap();
    stage.set_choice("ac-filter", Choice::Postpone).unwrap();
    stage.set_choice("gold", Choice::Approve).unwrap();

    assert_eq!(stage.approved_total(DecisionScope::Stage), Decimal::from(350));
    assert_eq!(
        stage.approved_total(DecisionScope::Group("pkg")),
        Decimal::from(150)
    );
    assert_eq!(
        stage.approved_total(DecisionScope::Group("unknown")),
        Decimal::ZERO
    );
}

#[test]
fn test_postponed_decisions() {
    let mut stage = create_approval_stage();
    stage.set_choice("ac-filter", Choice::Postpone).unwrap();

    let postponed: Vec<&str> = stage
        .postponed_decisions()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(postponed, vec!["ac-filter"]);
}
