use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available sitepack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build plan for a mode
    ///
    /// Loads package.json and the sitepack configuration, checks that the
    /// required inputs exist, and prints the plan as JSON.
    Plan(PlanArgs),

    /// Post-process pre-rendered routes in the output directory
    ///
    /// Moves stylesheet and script URLs under the public path and reduces
    /// each body to the application root followed by its scripts.
    Postprocess(PostprocessArgs),

    /// Validate configuration and required files
    Check(CheckArgs),

    /// Serve the output directory
    ///
    /// Uses the dev server settings: gzip compression and history fallback
    /// to the generated document.
    Serve(ServeArgs),
}

/// How the build mode is chosen
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Build mode: development, production or upload
    ///
    /// Falls back to NODE_ENV when omitted.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Reject an unrecognized mode instead of falling back to development
    #[arg(long)]
    pub strict_mode: bool,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Walk the plan through the logging executor
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the postprocess command
#[derive(Args, Debug)]
pub struct PostprocessArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Public path to prefix relative asset URLs with (defaults to package.json publicPath)
    #[arg(long, value_name = "PATH")]
    pub public_path: Option<String>,

    /// Id of the application root element
    #[arg(long, value_name = "ID")]
    pub app_root: Option<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long)]
    pub host: Option<String>,
}
