//! Shared helpers for integration tests

use tempfile::TempDir;

use bayflow::commands::{init, ShopContext};
use bayflow::models::{Choice, JobId, StageKind};
use bayflow::workshop::Workshop;

/// Temp dir with an initialized `.work/`.
pub fn init_test_shop() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    init::execute(temp_dir.path(), Some("Test Garage".to_string()))
        .expect("Failed to initialize shop");
    temp_dir
}

pub fn open_shop(temp_dir: &TempDir) -> ShopContext {
    ShopContext::open(temp_dir.path()).expect("Failed to open shop")
}

/// Complete every open task of the job's current stage.
pub fn complete_current_stage(workshop: &Workshop, id: &JobId) {
    let job = workshop.snapshot(id).expect("job exists");
    let stage = job.current_stage();
    for task in stage.tasks().iter().filter(|t| !t.completed) {
        workshop
            .toggle_task(id, stage.kind(), &task.id)
            .expect("Failed to toggle task");
    }
}

/// Walk a standard job to `target`, approving brake pads and the gold
/// package and postponing the AC filter at approval.
pub fn walk_to(workshop: &Workshop, id: &JobId, target: StageKind) {
    loop {
        let current = workshop.job_status(id).expect("job exists").current_stage;
        if current == target {
            return;
        }
        complete_current_stage(workshop, id);
        if current == StageKind::Approval {
            workshop
                .set_decision(id, current, "brake-pads", Choice::Approve)
                .expect("approve brake pads");
            workshop
                .set_decision(id, current, "ac-filter", Choice::Postpone)
                .expect("postpone ac filter");
            workshop
                .set_decision(id, current, "gold", Choice::Approve)
                .expect("approve gold");
        }
        workshop.advance_stage(id).expect("Failed to advance");
    }
}
