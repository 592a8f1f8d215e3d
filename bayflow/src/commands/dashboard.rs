use anyhow::Result;
use colored::Colorize;

use super::common::{section, ShopContext};

/// Shop-wide counts: open jobs per stage and postponed repairs.
pub fn execute(ctx: &ShopContext) -> Result<()> {
    let summary = ctx.workshop.dashboard();

    println!("{}", ctx.config.shop.name.bold().blue());
    println!("{}", "=".repeat(40));
    println!("  Jobs:             {}", summary.total_jobs);
    println!("  Ready to advance: {}", summary.ready_to_advance);
    println!("  Delivered:        {}", summary.delivered);
    println!("  Pending repairs:  {}", summary.pending_repairs);

    section("By stage");
    for row in &summary.by_stage {
        let count = if row.jobs == 0 {
            row.jobs.to_string().dimmed()
        } else {
            row.jobs.to_string().bold()
        };
        println!("  {:<11} {count}", row.stage.to_string());
    }
    Ok(())
}
