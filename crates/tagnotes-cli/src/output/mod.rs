// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Supports text, JSON, YAML and markdown formats.
//! Command handlers return data; this module handles presentation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{OutputContext, OutputFormat};

mod publish;

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Renders `result` to `w` in the format selected by `ctx`.
pub fn render_to<T: Renderable>(result: &T, ctx: &OutputContext, w: &mut dyn Write) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            writeln!(w, "{json}")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            writeln!(w, "{yaml}")?;
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(w, ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result
                .render_text(w, ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

/// Renders `result` to stdout.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    render_to(result, ctx, &mut io::stdout())
}
