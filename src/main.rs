//! Binary entry point: parse the CLI, resolve configuration, mount the
//! widget.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use morpion::{WidgetConfig, widget};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let mut config = match &args.config {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => WidgetConfig::default(),
    };
    if let Some(description) = args.description {
        config = config.with_description(description);
    }

    widget::run(config, &args.log_file)
}
