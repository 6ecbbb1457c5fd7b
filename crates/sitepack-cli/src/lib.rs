//! sitepack command-line interface.
//!
//! Wires the configuration, plan and pre-render crates into the `sitepack`
//! binary.
//!
//! - [`error`] - CLI error type and diagnostic conversion
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines and plan summaries
//! - [`commands`] - `plan`, `postprocess`, `check` and `serve`
//! - [`server`] - Static file server for the output directory
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
