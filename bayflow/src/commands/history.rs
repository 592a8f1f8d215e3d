use anyhow::Result;
use colored::Colorize;

use super::common::{section, ShopContext};

/// Past visits and postponed repairs for one vehicle.
pub fn execute(ctx: &ShopContext, vehicle: &str) -> Result<()> {
    let visits = ctx.workshop.vehicle_history(vehicle)?;
    if visits.is_empty() {
        println!("No jobs found for vehicle {vehicle}");
        return Ok(());
    }

    section(&format!("Service history for {vehicle}"));
    for visit in &visits {
        println!(
            "  {}  {:<13} {:<20} {:<11} {:>12}",
            visit.created_at.format("%Y-%m-%d").to_string().dimmed(),
            visit.job_id.to_string(),
            visit.customer_ref,
            visit.current_stage.to_string(),
            ctx.money(visit.total)
        );
    }

    let pending = ctx.workshop.pending_repairs(vehicle);
    if !pending.is_empty() {
        section("Pending repairs");
        for repair in &pending {
            println!(
                "  {} {:<40} {:>12} {}",
                "!".yellow().bold(),
                repair.decision.description,
                ctx.money(repair.decision.cost.amount()),
                format!("({})", repair.job_id).dimmed()
            );
        }
    }
    Ok(())
}
