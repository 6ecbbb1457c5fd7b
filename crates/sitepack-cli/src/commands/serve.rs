//! Serve command implementation.

use std::path::PathBuf;

use sitepack_config::{BuildMode, ConfigDiscovery, DevServerOptions};

use crate::cli::ServeArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::server;

/// Execute the serve command.
///
/// Serves the output directory with the development dev-server settings,
/// overridden by `--host` and `--port`.
pub async fn execute(args: ServeArgs, cwd: Option<PathBuf>) -> Result<()> {
    let root = utils::project_root(cwd)?;
    let site = ConfigDiscovery::new(&root).load_for_mode(BuildMode::Development)?;

    let content_base = root.join(&site.output.dir);
    if !content_base.is_dir() {
        return Err(CliError::FileNotFound(content_base));
    }

    let options = DevServerOptions {
        host: args.host.unwrap_or(site.dev_server.host),
        port: args.port.unwrap_or(site.dev_server.port),
        ..site.dev_server
    };

    let app = server::router(&content_base, &site.output.html_filename, &options);
    server::serve(app, &options).await
}
