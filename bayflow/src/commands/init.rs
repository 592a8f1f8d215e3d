use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::fs::{ShopConfig, WorkDir};

/// Create `.work/` under `base` with a default `config.toml`.
pub fn execute(base: &Path, shop_name: Option<String>) -> Result<()> {
    let work_dir = WorkDir::new(base);
    work_dir.initialize()?;

    let mut config = ShopConfig::default();
    if let Some(name) = shop_name {
        config.shop.name = name;
    }
    config.write(&work_dir.config_path())?;

    println!(
        "  {} Directory structure created {}",
        "✓".green().bold(),
        ".work/".dimmed()
    );
    println!(
        "  {} Config written for {}",
        "✓".green().bold(),
        config.shop.name.bold()
    );
    println!(
        "\n  Next: {}",
        "bayflow job create <vehicle> <customer>".cyan()
    );
    Ok(())
}
