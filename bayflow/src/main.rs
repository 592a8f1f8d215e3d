mod cli;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use bayflow::fs::{ShopConfig, WorkDir};
use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The configured level is only known once a shop exists.
    let base = Path::new(".");
    let configured = ShopConfig::load(&WorkDir::new(base).config_path())
        .ok()
        .and_then(|config| config.logging.level);
    bayflow::logging::init(configured.as_deref());

    dispatch(cli.command, base)
}
