// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for tagnotes.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the completion subcommand with shell-specific examples.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(tagnotes completion bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      tagnotes completion zsh > ~/.zsh/completions/_tagnotes

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      tagnotes completion fish > ~/.config/fish/completions/tagnotes.fish
"#;

/// Extended help text for the publish subcommand.
const PUBLISH_HELP: &str = r"EXAMPLES

  Publish notes for a prefixed release line, including only labeled PRs:
    tagnotes publish --tag v1/2.1.0 --label release-note

  Preview without touching the release:
    tagnotes publish --tag v1/2.1.0 --dry-run -o markdown

  Create the tag from a branch when it does not exist yet:
    tagnotes publish --tag v2/0.1.0 --target release/v2 --repo octocat/hello
";

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// The rendered release notes only
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// tagnotes - label-filtered GitHub release notes per release line.
///
/// Finds the previous release sharing the tag's prefix, collects the pull
/// requests merged since, and writes the labeled ones into the release body.
#[derive(Parser)]
#[command(name = "tagnotes")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create or update the GitHub release for a tag with its changelog
    #[command(after_long_help = PUBLISH_HELP)]
    Publish(PublishArgs),

    /// Generate a shell completion script (output to stdout)
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `tagnotes publish`.
#[derive(Args)]
pub struct PublishArgs {
    /// Release tag, e.g. `v1/2.1.0`
    #[arg(long, short = 't')]
    pub tag: String,

    /// Only include pull requests carrying this label (default: `release.label` config)
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Repository as owner/repo (default: inferred from the origin remote)
    #[arg(long, short = 'r')]
    pub repo: Option<String>,

    /// Branch or commit to create the tag from if the release does not exist
    #[arg(long)]
    pub target: Option<String>,

    /// Compute the changelog without creating or updating the release
    #[arg(long)]
    pub dry_run: bool,
}
