//! sitepack CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! implementations.

use clap::Parser;
use miette::Result;
use sitepack_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let cwd = args.cwd;
    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args, cwd),
        cli::Command::Postprocess(postprocess_args) => {
            commands::postprocess_execute(postprocess_args, cwd)
        }
        cli::Command::Check(check_args) => commands::check_execute(check_args, cwd),
        cli::Command::Serve(serve_args) => commands::serve_execute(serve_args, cwd).await,
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
