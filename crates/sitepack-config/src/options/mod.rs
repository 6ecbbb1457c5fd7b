//! Option groups that make up a [`SiteConfig`](crate::SiteConfig).

mod helpers;
mod output;
mod prerender;
mod upload;
mod vendor;

pub use output::{OutputOptions, StaticMapping};
pub use prerender::PrerenderOptions;
pub use upload::UploadOptions;
pub use vendor::VendorOptions;

pub(crate) use helpers::{
    default_entries, default_host, default_port, default_routes, default_static_mappings,
    default_template, default_true,
};
