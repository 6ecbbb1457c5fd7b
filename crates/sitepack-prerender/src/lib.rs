//! Post-processing for pre-rendered routes.
//!
//! Each route captured by the headless renderer is parsed into a
//! [`RouteDocument`], its stylesheet and script URLs are moved under the
//! public path, and its body is reduced to the application root followed by
//! the page scripts.

pub mod asset;
pub mod document;
pub mod error;
pub mod rewrite;
pub mod routes;

pub use asset::AssetReference;
pub use document::{Element, Node, RouteDocument};
pub use error::{DocumentStructureError, Result, RouteError};
pub use rewrite::{post_process, PostProcessor, DEFAULT_APP_ROOT_ID};
pub use routes::{process_routes, route_output_path, RenderedRoute, RouteHook};
