//! # Observability & Tracing
//!
//! Every pattern reports what it "prints" as a `tracing` event, so running the
//! showcase with a subscriber installed shows the same walkthrough a console
//! would, with structure attached.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber that hides module paths
//! (`with_target(false)`). The filter comes from `RUST_LOG`, falling back to
//! `patterns_recipe=info`, or `patterns_recipe=debug` when `verbose` is set.
//!
//! ```bash
//! # One line per printed message
//! RUST_LOG=info cargo run
//!
//! # Also listener bookkeeping, cache writes and factory selection
//! RUST_LOG=debug cargo run
//!
//! # Only one pattern's module
//! RUST_LOG=patterns_recipe::listener=debug cargo run -- --patterns listener
//! ```
//!
//! ## Output
//!
//! The showcase runs each pattern inside a span named after it, so with the compact
//! format every line is prefixed by its pattern:
//!
//! ```text
//! INFO pattern{name="state"}: Logging in user_name=admin
//! INFO pattern{name="state"}: Logging out user_name=admin
//! WARN pattern{name="protection-proxy"}: Incorrect password. Access denied! file="readme.md"
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(verbose: bool) {
    let fallback = if verbose {
        "patterns_recipe=debug"
    } else {
        "patterns_recipe=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
