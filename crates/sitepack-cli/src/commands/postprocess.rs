//! Postprocess command implementation.

use std::fs;
use std::path::PathBuf;

use sitepack_prerender::{process_routes, route_output_path, PostProcessor, RenderedRoute};

use crate::cli::PostprocessArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the postprocess command.
///
/// Reads every configured route's rendered document from the output
/// directory, rewrites them in parallel, and writes them back. Nothing is
/// written unless every route succeeds.
pub fn execute(args: PostprocessArgs, cwd: Option<PathBuf>) -> Result<()> {
    let project = utils::load_project(cwd, &args.mode)?;
    let out_dir = project.root.join(&project.site.output.dir);

    let hook = PostProcessor::new(args.public_path.unwrap_or(project.package.public_path))
        .with_app_root_id(args.app_root.unwrap_or(project.site.prerender.app_root_id));
    ui::info(&format!(
        "Post-processing {} routes with public path {}",
        project.site.routes.len(),
        hook.public_path
    ));

    let rendered = project
        .site
        .routes
        .iter()
        .map(|route| -> Result<RenderedRoute> {
            let path = route_output_path(&out_dir, route);
            let html = fs::read_to_string(&path).with_path(&path)?;
            Ok(RenderedRoute::new(route.as_str(), html))
        })
        .collect::<Result<Vec<_>>>()?;

    let processed = process_routes(&hook, rendered)?;

    for route in &processed {
        let path = route_output_path(&out_dir, &route.route);
        fs::write(&path, &route.html).with_path(&path)?;
        tracing::debug!(route = %route.route, path = %path.display(), "wrote route");
    }

    ui::success(&format!("Post-processed {} routes", processed.len()));
    Ok(())
}
