//! Command layer against a real `.work/` directory

use rust_decimal::Decimal;

use bayflow::commands::{
    dashboard, decision, history, init, invoice, job, stage, status, task, ShopContext,
};
use bayflow::fs::ShopConfig;
use bayflow::models::{Choice, PhotoSlot, StageKind};

use super::helpers::{complete_current_stage, init_test_shop, open_shop};

#[test]
fn test_init_writes_config() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    assert_eq!(ctx.config.shop.name, "Test Garage");
    assert_eq!(
        ShopConfig::load(&ctx.work_dir.config_path()).unwrap(),
        ctx.config
    );
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = init_test_shop();
    assert!(init::execute(temp_dir.path(), None).is_err());
}

#[test]
fn test_open_without_init_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = ShopContext::open(temp_dir.path()).err().unwrap();
    assert!(err.to_string().contains("bayflow init"));
}

#[test]
fn test_commands_drive_a_job() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    let id = job::create(&ctx, "ABC-1234".to_string(), "Sarah Johnson".to_string()).unwrap();
    let raw = id.to_string();

    job::list(&ctx).unwrap();
    job::show(&ctx, &raw).unwrap();
    status::execute(&ctx, &raw).unwrap();
    stage::show(&ctx, &raw, None).unwrap();

    assert!(stage::advance(&ctx, &raw).is_err());
    complete_current_stage(&ctx.workshop, &id);
    stage::advance(&ctx, &raw).unwrap();
    stage::back(&ctx, &raw).unwrap();
    stage::advance(&ctx, &raw).unwrap();

    task::toggle(&ctx, &raw, StageKind::Service, "oil-change").unwrap();
    task::photo(
        &ctx,
        &raw,
        StageKind::Service,
        "oil-change",
        PhotoSlot::After,
        "photos/after.jpg".to_string(),
    )
    .unwrap();
    task::flag(&ctx, &raw, StageKind::Qc, "test-drive", "Pulls left".to_string()).unwrap();
    task::clear(&ctx, &raw, StageKind::Qc, "test-drive").unwrap();
    decision::set(&ctx, &raw, StageKind::Approval, "silver", Choice::Approve).unwrap();
    stage::show(&ctx, &raw, Some(StageKind::Approval)).unwrap();

    invoice::discount(&ctx, &raw, Decimal::from(10)).unwrap();
    invoice::show(&ctx, &raw, false).unwrap();
    invoice::show(&ctx, &raw, true).unwrap();
    history::execute(&ctx, "ABC-1234").unwrap();
    dashboard::execute(&ctx).unwrap();

    // oil change 45 + silver 80 = 125, less 10%, plus 15% tax
    let total = ctx.workshop.invoice(&id).unwrap().total;
    assert_eq!(total, Decimal::new(12938, 2));
}

#[test]
fn test_invalid_job_id_is_rejected_before_lookup() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    let err = status::execute(&ctx, "../etc").unwrap_err();
    assert!(err.to_string().contains("invalid characters"));

    let err = status::execute(&ctx, "JC-00000000").unwrap_err();
    assert!(err.to_string().contains("Unknown job"));
}

#[test]
fn test_invoice_render_lists_totals() {
    let temp_dir = init_test_shop();
    let ctx = open_shop(&temp_dir);
    let id = ctx.workshop.create_job("ABC-1234", "Sarah").unwrap();
    ctx.workshop
        .toggle_task(&id, StageKind::Service, "oil-change")
        .unwrap();
    ctx.workshop
        .toggle_task(&id, StageKind::Service, "oil-filter")
        .unwrap();
    ctx.workshop.set_discount(&id, Decimal::from(10)).unwrap();

    let rendered = invoice::render(&ctx, &ctx.workshop.invoice(&id).unwrap());
    assert!(rendered.contains("Engine Oil Change"));
    assert!(rendered.contains("Discount (10%)"));
    assert!(rendered.contains("-$6.00"));
    assert!(rendered.contains("Tax (15%)"));
    assert!(rendered.contains("$62.10"));
}
