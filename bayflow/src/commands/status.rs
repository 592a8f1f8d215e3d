use anyhow::Result;
use colored::Colorize;

use crate::models::JobStatusReport;

use super::common::{progress_bar, section, status_icon, ShopContext};

/// Show the stage strip of one job.
pub fn execute(ctx: &ShopContext, job_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let report = ctx.workshop.job_status(&id)?;

    println!(
        "{} {} {}",
        report.job_id.to_string().bold().blue(),
        report.vehicle_ref,
        format!("({})", report.customer_ref).dimmed()
    );
    print_stages(&report);
    Ok(())
}

pub fn print_stages(report: &JobStatusReport) {
    section("Stages");
    for summary in &report.stages {
        let lock = if summary.locked { " locked" } else { "" };
        println!(
            "  {} {:<11} {} {:>5}{}",
            status_icon(summary.status),
            summary.stage.to_string(),
            progress_bar(summary.progress, 10),
            summary.progress.to_string(),
            lock.dimmed()
        );
    }

    let at_end = report.stages.last().map(|s| s.stage) == Some(report.current_stage);
    let hint = if at_end {
        format!("Job is at its final stage ({})", report.current_stage).green()
    } else if report.can_advance {
        format!("{} is ready to advance", report.current_stage).green()
    } else {
        format!("{} has unmet items", report.current_stage).yellow()
    };
    println!("\n  {hint}");
}
