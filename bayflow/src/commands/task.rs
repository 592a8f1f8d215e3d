//! Checklist commands: toggle, QC issues, and photos.

use anyhow::Result;
use colored::Colorize;

use crate::models::{PhotoRef, PhotoSlot, StageKind};

use super::common::ShopContext;

pub fn toggle(ctx: &ShopContext, job_id: &str, stage: StageKind, task_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let completed = ctx.workshop.toggle_task(&id, stage, task_id)?;

    if completed {
        println!("  {} {stage} / {task_id} done", "✓".green().bold());
    } else {
        println!("  {} {stage} / {task_id} reopened", "○".dimmed());
    }
    Ok(())
}

pub fn flag(
    ctx: &ShopContext,
    job_id: &str,
    stage: StageKind,
    task_id: &str,
    note: String,
) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    ctx.workshop.flag_issue(&id, stage, task_id, note.as_str())?;
    println!("  {} Issue on {stage} / {task_id}: {note}", "!".red().bold());
    Ok(())
}

pub fn clear(ctx: &ShopContext, job_id: &str, stage: StageKind, task_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    ctx.workshop.clear_issue(&id, stage, task_id)?;
    println!("  {} Issue on {stage} / {task_id} cleared", "✓".green().bold());
    Ok(())
}

pub fn photo(
    ctx: &ShopContext,
    job_id: &str,
    stage: StageKind,
    task_id: &str,
    slot: PhotoSlot,
    path: String,
) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    ctx.workshop
        .attach_photo(&id, stage, task_id, slot, PhotoRef(path.clone()))?;
    println!(
        "  {} {slot} photo for {stage} / {task_id}: {}",
        "✓".green().bold(),
        path.dimmed()
    );
    Ok(())
}
