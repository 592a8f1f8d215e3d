use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use rust_decimal::Decimal;
use std::path::Path;

use crate::fs::{ShopConfig, WorkDir, YamlJobStore};
use crate::models::{JobId, Progress, StageStatus};
use crate::validation::validate_id;
use crate::workshop::Workshop;

/// Everything a command needs: the work directory, its config, and a
/// workshop loaded from `.work/jobs/`.
pub struct ShopContext {
    pub work_dir: WorkDir,
    pub config: ShopConfig,
    pub workshop: Workshop,
}

impl ShopContext {
    /// Open the shop rooted at `base`. Fails if `bayflow init` has not run.
    pub fn open<P: AsRef<Path>>(base: P) -> Result<Self> {
        let work_dir = WorkDir::new(base);
        work_dir.load()?;

        let config = ShopConfig::load(&work_dir.config_path())?;
        let store = YamlJobStore::new(work_dir.jobs_dir());
        let workshop =
            Workshop::with_repository(Box::new(store)).context("Failed to load jobs")?;

        Ok(Self {
            work_dir,
            config,
            workshop,
        })
    }

    /// Validate a job id typed by the user.
    pub fn job_id(&self, raw: &str) -> Result<JobId> {
        validate_id(raw)?;
        Ok(JobId::from(raw))
    }

    pub fn money(&self, amount: Decimal) -> String {
        format_money(&self.config.billing.currency_symbol, amount)
    }
}

/// `$62.10`; negative amounts as `-$6.00`.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

pub fn status_icon(status: StageStatus) -> ColoredString {
    match status {
        StageStatus::Completed => status.icon().green().bold(),
        StageStatus::Active => status.icon().yellow().bold(),
        StageStatus::Pending => status.icon().dimmed(),
    }
}

/// `[#####-----]` style bar.
pub fn progress_bar(progress: Progress, width: usize) -> String {
    let filled = progress.percent() * width / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "─".repeat(40).dimmed());
}
