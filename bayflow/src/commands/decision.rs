use anyhow::Result;
use colored::Colorize;

use crate::models::{Choice, StageKind};

use super::common::ShopContext;

pub fn set(
    ctx: &ShopContext,
    job_id: &str,
    stage: StageKind,
    decision_id: &str,
    choice: Choice,
) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    ctx.workshop.set_decision(&id, stage, decision_id, choice)?;

    let label = match choice {
        Choice::Approve => "approved".green(),
        Choice::Postpone => "postponed".yellow(),
        Choice::Unset => "cleared".dimmed(),
    };
    println!("  {stage} / {decision_id} {label}");

    // Approving a package postpones its alternatives; say so.
    if choice == Choice::Approve {
        let job = ctx.workshop.snapshot(&id)?;
        if let Some(stage) = job.stage(stage) {
            if let Some(decision) = stage.decision(decision_id) {
                if let Some(group) = &decision.group {
                    let others: Vec<&str> = stage
                        .decisions()
                        .iter()
                        .filter(|d| d.in_group(group) && d.id != decision_id)
                        .map(|d| d.id.as_str())
                        .collect();
                    if !others.is_empty() {
                        println!("  {}", format!("postponed: {}", others.join(", ")).dimmed());
                    }
                }
            }
        }
    }
    Ok(())
}
