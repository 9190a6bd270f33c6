//! Runtime orchestration for the showcase binary.
//!
//! This module contains everything that is *not* a pattern:
//!
//! - **Configuration**: [`ShowcaseConfig`], parsed from the command line
//! - **Orchestration**: [`Showcase`] runs the selected walkthroughs in their own spans
//! - **Observability setup**: [`setup_tracing`] installs the log subscriber
//!
//! The pattern modules never depend on anything in here.

pub mod config;
pub mod showcase;
pub mod tracing;

pub use config::*;
pub use showcase::*;
pub use self::tracing::*;
