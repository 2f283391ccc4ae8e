// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the tagnotes CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr.
//! `RUST_LOG` always wins; otherwise `-v` raises tagnotes to debug level.
//!
//! # Examples
//!
//! ```bash
//! # Debug output for troubleshooting
//! tagnotes -v publish --tag v1/2.0.0
//!
//! # Trace octocrab requests as well
//! RUST_LOG=tagnotes=trace,octocrab=debug tagnotes publish --tag v1/2.0.0
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "tagnotes=warn,tagnotes_core=warn,octocrab=error,reqwest=error";

/// Filter used with `-v` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "tagnotes=debug,tagnotes_core=debug,octocrab=error,reqwest=error";

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize the logging subsystem.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }

    #[test]
    fn test_verbose_raises_level() {
        assert!(default_directives(true).contains("tagnotes_core=debug"));
        assert!(default_directives(false).contains("tagnotes_core=warn"));
    }
}
