pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod options;
pub mod package;
pub mod validation;

// Re-export main types
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use options::*;
pub use package::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, ConfigSource, ENV_PREFIX};
pub use validation::{
    validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator, ValidationContext,
};
