//! Stage navigation and the stage detail view.

use anyhow::Result;
use colored::Colorize;

use crate::models::{Choice, DecisionCost, Severity, StageDetail, StageKind};

use super::common::{progress_bar, section, status_icon, ShopContext};

/// Move the job past its current stage.
pub fn advance(ctx: &ShopContext, job_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let next = ctx.workshop.advance_stage(&id)?;
    println!(
        "  {} Job {id} moved to {}",
        "✓".green().bold(),
        next.to_string().bold()
    );
    Ok(())
}

pub fn back(ctx: &ShopContext, job_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let previous = ctx.workshop.retreat_stage(&id)?;
    println!("  Job {id} back at {}", previous.to_string().bold());
    Ok(())
}

/// Show one stage, the current one when `stage` is `None`.
pub fn show(ctx: &ShopContext, job_id: &str, stage: Option<StageKind>) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let stage = match stage {
        Some(stage) => stage,
        None => ctx.workshop.job_status(&id)?.current_stage,
    };
    let detail = ctx.workshop.stage_detail(&id, stage)?;
    print_detail(ctx, &detail);
    Ok(())
}

fn print_detail(ctx: &ShopContext, detail: &StageDetail) {
    let lock = if detail.locked { " (locked)" } else { "" };
    section(&format!("{}{lock}", detail.stage));
    println!(
        "  {} {} {} {}",
        status_icon(detail.status),
        detail.status,
        progress_bar(detail.progress, 20),
        detail.progress
    );

    if !detail.tasks.is_empty() {
        println!("\n  {}", "Tasks".bold());
    }
    for task in &detail.tasks {
        let mark = if task.completed {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        let price = task.price.map(|p| ctx.money(p)).unwrap_or_default();
        println!("  {mark} {:<24} {:<22} {}", task.id, task.name, price.dimmed());
        if let Some(issue) = &task.issue {
            println!("      {} {issue}", "issue:".red().bold());
        }
        for (label, photo) in [("before", &task.before_photo), ("after", &task.after_photo)] {
            if let Some(photo) = photo {
                println!("      {} {photo}", format!("{label}:").dimmed());
            }
        }
    }

    if !detail.decisions.is_empty() {
        println!("\n  {}", "Decisions".bold());
    }
    for decision in &detail.decisions {
        let choice = match decision.choice {
            Choice::Approve => "approved".green(),
            Choice::Postpone => "postponed".yellow(),
            Choice::Unset => "pending".dimmed(),
        };
        let severity = match decision.severity {
            Severity::High => "high".red(),
            Severity::Medium => "medium".yellow(),
            Severity::Low => "low".normal(),
        };
        let cost = match decision.cost {
            DecisionCost::PartsLabour { parts, labour } => format!(
                "{} (parts {} + labour {})",
                ctx.money(parts + labour),
                ctx.money(parts),
                ctx.money(labour)
            ),
            DecisionCost::Flat { price } => ctx.money(price),
        };
        let group = decision
            .group
            .as_deref()
            .map(|g| format!(" [{g}]"))
            .unwrap_or_default();
        println!(
            "  {:<10} {:<12} {:<7} {}{}",
            choice,
            decision.id,
            severity,
            cost,
            group.dimmed()
        );
        println!("             {}", decision.description.dimmed());
    }

    if !detail.missing_tasks.is_empty() {
        println!(
            "\n  {} {}",
            "Unfinished:".yellow(),
            detail.missing_tasks.join(", ")
        );
    }
    if !detail.pending_decisions.is_empty() {
        println!(
            "  {} {}",
            "Choose one of:".yellow(),
            detail.pending_decisions.join(", ")
        );
    }
}
