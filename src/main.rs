//! # Patterns Recipe Showcase
//!
//! Runs the walkthrough of each selected design pattern and logs what it prints.
//!
//! 1. Parse [`ShowcaseConfig`] from the command line.
//! 2. Install the tracing subscriber.
//! 3. Run the [`Showcase`] and log each report.

use clap::Parser;
use patterns_recipe::runtime::{setup_tracing, Showcase, ShowcaseConfig};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

fn main() -> ExitCode {
    let config = ShowcaseConfig::parse();
    setup_tracing(config.verbose);

    info!("Starting patterns showcase");
    match serde_json::to_string(&config) {
        Ok(json) => debug!(config = %json, "Showcase config"),
        Err(e) => warn!(error = %e, "Could not render showcase config"),
    }

    match Showcase::new(config).run() {
        Ok(reports) => {
            for report in &reports {
                info!(
                    pattern = %report.pattern,
                    lines = report.lines.len(),
                    "Walkthrough finished"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Showcase failed");
            ExitCode::FAILURE
        }
    }
}
