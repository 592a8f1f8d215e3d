use anyhow::Result;
use colored::Colorize;

use crate::models::JobId;

use super::common::{section, ShopContext};
use super::status;

pub fn create(ctx: &ShopContext, vehicle: String, customer: String) -> Result<JobId> {
    let id = ctx.workshop.create_job(vehicle.as_str(), customer.as_str())?;
    println!(
        "  {} Job {} opened for {} ({})",
        "✓".green().bold(),
        id.to_string().bold(),
        vehicle,
        customer
    );
    Ok(id)
}

pub fn list(ctx: &ShopContext) -> Result<()> {
    let jobs = ctx.workshop.snapshots();
    if jobs.is_empty() {
        println!("No jobs yet. Open one with 'bayflow job create'.");
        return Ok(());
    }

    section("Jobs");
    for job in &jobs {
        let stage = job.current_stage().kind();
        let stage = if job.is_terminal() {
            stage.to_string().green()
        } else {
            stage.to_string().yellow()
        };
        println!(
            "  {:<13} {:<12} {:<20} {} {}",
            job.id().to_string().bold(),
            job.vehicle_ref(),
            job.customer_ref(),
            stage,
            job.created_at().format("%Y-%m-%d").to_string().dimmed()
        );
    }
    Ok(())
}

pub fn show(ctx: &ShopContext, job_id: &str) -> Result<()> {
    let id = ctx.job_id(job_id)?;
    let job = ctx.workshop.snapshot(&id)?;

    section(&format!("Job {}", job.id()));
    println!("  Vehicle:  {}", job.vehicle_ref());
    println!("  Customer: {}", job.customer_ref());
    println!("  Opened:   {}", job.created_at().format("%Y-%m-%d %H:%M"));
    println!("  Updated:  {}", job.updated_at().format("%Y-%m-%d %H:%M"));

    status::print_stages(&ctx.workshop.job_status(&id)?);
    Ok(())
}
