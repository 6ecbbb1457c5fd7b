//! Command implementations for the sitepack CLI.
//!
//! Each command takes its parsed arguments plus the global `--cwd` and
//! returns a [`Result`](crate::error::Result).

pub mod check;
pub mod plan;
pub mod postprocess;
pub mod serve;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
pub use postprocess::execute as postprocess_execute;
pub use serve::execute as serve_execute;
