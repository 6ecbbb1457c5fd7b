//! Applying the post-processing hook across every pre-rendered route.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{DocumentStructureError, RouteError};
use crate::rewrite::PostProcessor;

/// One route's markup as captured by the headless renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRoute {
    pub route: String,
    pub html: String,
}

impl RenderedRoute {
    pub fn new(route: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            html: html.into(),
        }
    }
}

/// Called by the pre-renderer once per captured route.
pub trait RouteHook: Sync {
    fn process(&self, route: RenderedRoute) -> Result<RenderedRoute, DocumentStructureError>;
}

impl RouteHook for PostProcessor {
    fn process(&self, route: RenderedRoute) -> Result<RenderedRoute, DocumentStructureError> {
        let html = self.rewrite(&route.html)?;
        Ok(RenderedRoute { html, ..route })
    }
}

/// Run `hook` over every route in parallel.
///
/// Output order matches input order. If any route fails, the error for the
/// earliest failing route is returned.
pub fn process_routes(
    hook: &dyn RouteHook,
    routes: Vec<RenderedRoute>,
) -> Result<Vec<RenderedRoute>, RouteError> {
    routes
        .into_par_iter()
        .map(|rendered| {
            let route = rendered.route.clone();
            let _span = tracing::debug_span!("route", route = %route).entered();
            hook.process(rendered)
                .map_err(|source| RouteError { route, source })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Where the rendered file for `route` lives under `out_dir`.
///
/// `/` maps to `index.html`, `/detail` to `detail/index.html`.
pub fn route_output_path(out_dir: &Path, route: &str) -> PathBuf {
    route
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(out_dir.to_path_buf(), |path, segment| path.join(segment))
        .join("index.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl RouteHook for Upper {
        fn process(
            &self,
            route: RenderedRoute,
        ) -> Result<RenderedRoute, DocumentStructureError> {
            if route.html.is_empty() {
                return Err(DocumentStructureError::MissingBody);
            }
            Ok(RenderedRoute {
                html: route.html.to_uppercase(),
                ..route
            })
        }
    }

    #[test]
    fn preserves_input_order() {
        let routes: Vec<_> = (0..64)
            .map(|i| RenderedRoute::new(format!("/r{i}"), format!("page {i}")))
            .collect();

        let processed = process_routes(&Upper, routes).unwrap();
        for (i, route) in processed.iter().enumerate() {
            assert_eq!(route.route, format!("/r{i}"));
            assert_eq!(route.html, format!("PAGE {i}"));
        }
    }

    #[test]
    fn reports_earliest_failing_route() {
        let routes = vec![
            RenderedRoute::new("/", "ok"),
            RenderedRoute::new("/detail", ""),
            RenderedRoute::new("/detail2", ""),
        ];

        let err = process_routes(&Upper, routes).unwrap_err();
        assert_eq!(err.route, "/detail");
        assert_eq!(err.source, DocumentStructureError::MissingBody);
    }

    #[test]
    fn output_paths() {
        let out = Path::new("/srv/build");
        assert_eq!(route_output_path(out, "/"), PathBuf::from("/srv/build/index.html"));
        assert_eq!(
            route_output_path(out, "/detail"),
            PathBuf::from("/srv/build/detail/index.html")
        );
        assert_eq!(
            route_output_path(out, "/docs/intro/"),
            PathBuf::from("/srv/build/docs/intro/index.html")
        );
    }
}
