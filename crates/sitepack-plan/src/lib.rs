//! Build plan assembly for sitepack.
//!
//! [`assemble`] turns a [`BuildMode`](sitepack_config::BuildMode) and the
//! project inputs into a [`BuildPlan`]: the ordered stages an external
//! bundler runs. [`run_plan`] walks a plan through a [`StageExecutor`].
//!
//! ```
//! use chrono::NaiveDate;
//! use sitepack_config::{BuildMode, PackageInfo, SiteConfig};
//! use sitepack_plan::{assemble, PlanInputs, StageKind};
//!
//! let inputs = PlanInputs {
//!     root: "/project".into(),
//!     package: PackageInfo::new("shop", "1.0.0"),
//!     site: SiteConfig::default(),
//!     build_time: NaiveDate::from_ymd_opt(2024, 1, 1)
//!         .unwrap()
//!         .and_hms_opt(0, 0, 0)
//!         .unwrap(),
//! };
//!
//! let plan = assemble(BuildMode::Production, &inputs);
//! assert!(plan.contains(StageKind::PreRender));
//! plan.check_ordering().unwrap();
//! ```

pub mod assemble;
pub mod banner;
pub mod error;
pub mod execute;
pub mod plan;
pub mod stage;

pub use assemble::{assemble, PlanInputs, IMAGE_INLINE_LIMIT};
pub use banner::Banner;
pub use error::{PlanError, Result, StageExecutionError};
pub use execute::{run_plan, RunReport, StageExecutor};
pub use plan::{BuildPlan, DevServer, DevTool, OutputConfig};
pub use stage::{StageDescriptor, StageKind};
