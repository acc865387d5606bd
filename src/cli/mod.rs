//! Command-line interface.
//!
//! The installer is fully interactive; flags only control observability,
//! never the install flow itself.

pub mod run;

pub use run::run;

use clap::Parser;

/// Interactive bootstrapper for PocketBase-backed web projects.
#[derive(Debug, Parser)]
#[command(name = "pocketstack", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
