// SPDX-License-Identifier: Apache-2.0

//! tagnotes - label-filtered GitHub release notes per release line.
//!
//! Creates the GitHub release for a tag if needed and writes the pull
//! requests merged since the previous release of the same line into it.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod provider;

use anyhow::{Context, Result};
use clap::Parser;
use tagnotes_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            std::process::exit(1);
        }
    }
}
