//! The post-processing pass applied to each pre-rendered route.

use crate::asset::AssetReference;
use crate::document::{Element, Node, RouteDocument};
use crate::error::{DocumentStructureError, Result};

/// Id of the element the client application mounts on.
pub const DEFAULT_APP_ROOT_ID: &str = "app";

/// Rewrites rendered markup so assets resolve under `public_path` and the
/// body holds only the application root and its scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessor {
    pub public_path: String,
    pub app_root_id: String,
}

impl PostProcessor {
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
            app_root_id: DEFAULT_APP_ROOT_ID.to_string(),
        }
    }

    pub fn with_app_root_id(mut self, id: impl Into<String>) -> Self {
        self.app_root_id = id.into();
        self
    }

    /// Apply the pass to one document.
    ///
    /// Not idempotent: relative URLs are prefixed again on every call.
    pub fn rewrite(&self, html: &str) -> Result<String> {
        let mut document = RouteDocument::parse(html)?;

        if let Some(root) = document.find_mut("html") {
            root.remove_attr("style");
        }

        // Only the first stylesheet link is served from the public path
        if let Some(link) = document.find_mut("link") {
            self.prefix(link, "href");
        }

        let body = document
            .find_mut("body")
            .ok_or(DocumentStructureError::MissingBody)?;

        // Every body script, including those inside the app root, is rewritten
        // in place and copied after the root
        let mut scripts = Vec::new();
        body.for_each_mut("script", &mut |script: &mut Element| {
            self.prefix(script, "src");
            scripts.push(script.clone());
        });

        let app_root = body
            .find_by_id(&self.app_root_id)
            .cloned()
            .ok_or_else(|| DocumentStructureError::MissingAppRoot {
                id: self.app_root_id.clone(),
            })?;

        body.children = std::iter::once(app_root)
            .chain(scripts)
            .map(Node::Element)
            .collect();

        Ok(document.to_string())
    }

    fn prefix(&self, element: &mut Element, attr: &str) {
        let Some(url) = element.attr(attr) else {
            return;
        };
        let reference = AssetReference::classify(url);
        if reference.is_relative() {
            let rewritten = reference.with_public_path(&self.public_path);
            tracing::trace!(element = %element.name, from = url, to = %rewritten, "prefixed asset");
            element.set_attr(attr, rewritten);
        }
    }
}

/// Post-process `html` with the default application root id.
pub fn post_process(html: &str, public_path: &str) -> Result<String> {
    PostProcessor::new(public_path).rewrite(html)
}
