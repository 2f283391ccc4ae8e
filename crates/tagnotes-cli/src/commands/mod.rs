// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the tagnotes CLI.

pub mod completion;
pub mod publish;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tagnotes_core::AppConfig;

use crate::cli::{Commands, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Publish(args) => {
            let message = if args.dry_run {
                "Computing release notes..."
            } else {
                "Publishing release notes..."
            };
            let spinner = maybe_spinner(&ctx, message);
            let result = publish::run(&args, config).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            output::render(&result?, &ctx)
        }

        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
