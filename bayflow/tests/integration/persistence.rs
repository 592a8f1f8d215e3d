//! Jobs survive reopening the shop

use std::fs;

use rust_decimal::Decimal;

use bayflow::fs::YamlJobStore;
use bayflow::models::{Choice, JobId, PhotoRef, PhotoSlot, StageKind, WorkflowError};
use bayflow::workshop::{JobRepository, Workshop, WorkshopError};

use super::helpers::{complete_current_stage, init_test_shop, open_shop, walk_to};

#[test]
fn test_reopened_shop_sees_same_jobs() {
    let temp_dir = init_test_shop();
    let id = {
        let ctx = open_shop(&temp_dir);
        let id = ctx.workshop.create_job("ABC-1234", "Sarah Johnson").unwrap();
        walk_to(&ctx.workshop, &id, StageKind::Service);
        ctx.workshop
            .attach_photo(
                &id,
                StageKind::Service,
                "oil-change",
                PhotoSlot::Before,
                PhotoRef("photos/abc-oil-before.jpg".to_string()),
            )
            .unwrap();
        ctx.workshop.set_discount(&id, Decimal::new(125, 1)).unwrap();
        id
    };

    let ctx = open_shop(&temp_dir);
    let job = ctx.workshop.snapshot(&id).unwrap();
    assert_eq!(job.current_stage().kind(), StageKind::Service);
    assert!(job.stage(StageKind::Approval).unwrap().is_locked());
    assert_eq!(job.discount_percent(), Decimal::new(125, 1));
    let approval = job.stage(StageKind::Approval).unwrap();
    assert_eq!(approval.decision("gold").unwrap().choice, Choice::Approve);
    assert_eq!(approval.decision("silver").unwrap().choice, Choice::Postpone);
    assert!(job
        .stage(StageKind::Service)
        .unwrap()
        .task("oil-change")
        .unwrap()
        .photo(PhotoSlot::Before)
        .is_some());
}

#[test]
fn test_each_job_gets_its_own_file() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    let first = ctx.workshop.create_job("ABC-1234", "Sarah").unwrap();
    let second = ctx.workshop.create_job("XYZ-9876", "Omar").unwrap();

    let jobs_dir = ctx.work_dir.jobs_dir();
    assert!(jobs_dir.join(format!("{first}.yaml")).exists());
    assert!(jobs_dir.join(format!("{second}.yaml")).exists());

    let content = fs::read_to_string(jobs_dir.join(format!("{first}.yaml"))).unwrap();
    assert!(content.contains("vehicle_ref: ABC-1234"));
}

#[test]
fn test_rejected_command_leaves_file_alone() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    let id = ctx.workshop.create_job("ABC-1234", "Sarah").unwrap();
    let path = ctx.work_dir.jobs_dir().join(format!("{id}.yaml"));
    let before = fs::read_to_string(&path).unwrap();

    assert!(ctx.workshop.advance_stage(&id).is_err());
    assert!(ctx
        .workshop
        .toggle_task(&id, StageKind::Intake, "no-such-task")
        .is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_store_works_without_workshop() {
    let temp_dir = init_test_shop();
    let store = YamlJobStore::new(temp_dir.path().join(".work").join("jobs"));
    assert!(store.list_jobs().unwrap().is_empty());

    let workshop = Workshop::with_repository(Box::new(store)).unwrap();
    let id = workshop.create_job("ABC-1234", "Sarah").unwrap();

    let store = YamlJobStore::new(temp_dir.path().join(".work").join("jobs"));
    let loaded = store.load_job(&id).unwrap().unwrap();
    assert_eq!(loaded, workshop.snapshot(&id).unwrap());
    assert!(store.load_job(&JobId::from("JC-missing0")).unwrap().is_none());
}

#[test]
fn test_tampered_job_file_is_skipped() {
    let temp_dir = init_test_shop();
    let (tampered, intact) = {
        let ctx = open_shop(&temp_dir);
        let tampered = ctx.workshop.create_job("ABC-1234", "Sarah").unwrap();
        let intact = ctx.workshop.create_job("XYZ-9876", "Omar").unwrap();
        (tampered, intact)
    };
    let path = temp_dir
        .path()
        .join(".work")
        .join("jobs")
        .join(format!("{tampered}.yaml"));
    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, format!("{content}current_stage_index: 42\n").replace(
        "current_stage_index: 0\n",
        "",
    ))
    .unwrap();

    let ctx = open_shop(&temp_dir);
    assert_eq!(ctx.workshop.job_ids(), vec![intact]);
    assert!(ctx.workshop.snapshot(&tampered).is_err());
}

#[test]
fn test_stale_shop_cannot_undo_a_finalized_stage() {
    let temp_dir = init_test_shop();
    let id = open_shop(&temp_dir)
        .workshop
        .create_job("ABC-1234", "Sarah")
        .unwrap();
    let front_desk = open_shop(&temp_dir);
    let bay = open_shop(&temp_dir);

    complete_current_stage(&front_desk.workshop, &id);
    assert_eq!(
        front_desk.workshop.advance_stage(&id).unwrap(),
        StageKind::Inspection
    );

    let err = bay
        .workshop
        .toggle_task(&id, StageKind::Intake, "photo-front")
        .unwrap_err();
    assert!(matches!(
        err,
        WorkshopError::Workflow(WorkflowError::StageLocked(StageKind::Intake))
    ));

    let job = open_shop(&temp_dir).workshop.snapshot(&id).unwrap();
    assert_eq!(job.current_stage().kind(), StageKind::Inspection);
    let intake = job.stage(StageKind::Intake).unwrap();
    assert!(intake.is_locked());
    assert!(intake.task("photo-front").unwrap().completed);
}
