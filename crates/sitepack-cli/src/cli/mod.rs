//! Command-line interface definition for sitepack.
//!
//! - `sitepack plan` - Assemble and print the build plan for a mode
//! - `sitepack postprocess` - Rewrite pre-rendered routes in place
//! - `sitepack check` - Validate configuration and required files
//! - `sitepack serve` - Serve the output directory

mod commands;
#[cfg(test)]
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, ModeArgs, PlanArgs, PostprocessArgs, ServeArgs};

/// sitepack - build plans and route post-processing for static sites
#[derive(Parser, Debug)]
#[command(
    name = "sitepack",
    version,
    about = "Assemble build plans and post-process pre-rendered routes",
    long_about = "sitepack turns a build mode and project configuration into the ordered\n\
                  stage plan a bundler executes, and rewrites pre-rendered route documents\n\
                  so their assets are served from the public path."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
