// SPDX-License-Identifier: Apache-2.0

//! Output formatting for release notes publication.

use std::io::{self, Write};

use console::style;
use tagnotes_core::{PublishAction, PublishOutcome};

use crate::cli::OutputContext;
use crate::output::Renderable;

fn headline(outcome: &PublishOutcome) -> String {
    match outcome.action {
        PublishAction::Created => format!("Created release {}", outcome.tag),
        PublishAction::Updated => format!("Updated release {}", outcome.tag),
        PublishAction::DryRun => format!("Dry run - release {} not modified", outcome.tag),
    }
}

impl Renderable for PublishOutcome {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let headline = headline(self);
        if self.action == PublishAction::DryRun {
            writeln!(w, "{}", style(headline).yellow().bold())?;
        } else {
            writeln!(w, "{}", style(headline).green().bold())?;
        }

        let previous = self.previous_tag.as_deref().unwrap_or("none");
        writeln!(w, "  {}  {}", style("previous:").dim(), previous)?;
        writeln!(w, "  {}  {}", style("base:").dim(), self.compare_base)?;
        let label = if self.label.is_empty() {
            style("any").dim().to_string()
        } else {
            style(&self.label).cyan().to_string()
        };
        writeln!(w, "  {}  {}", style("label:").dim(), label)?;
        writeln!(
            w,
            "  {}  {} of {} pull requests from {} commits",
            style("included:").dim(),
            self.pulls.len(),
            self.pulls_collected,
            self.commits
        )?;
        if let Some(url) = &self.release_url {
            writeln!(w, "  {}  {}", style("url:").dim(), url)?;
        }

        if ctx.verbose {
            for pull in &self.pulls {
                writeln!(
                    w,
                    "    {} #{} [{}]",
                    style("-").dim(),
                    pull.number,
                    pull.labels.join(", ")
                )?;
            }
        }

        writeln!(w)?;
        if self.body.is_empty() {
            writeln!(w, "{}", style("No pull requests matched.").dim())?;
        } else {
            write!(w, "{}", self.body)?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        write!(w, "{}", self.body)
    }
}
