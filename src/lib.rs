//! Creates new kernel configs for the next compatibility matrix.
//!
//! ```no_run
//! use kconfig_bump::{BumpConfig, Bumper};
//!
//! # fn main() -> kconfig_bump::error::Result<()> {
//! let config = BumpConfig::from_env("v", "w")?;
//! Bumper::new(config)?.run()?;
//! # Ok(())
//! # }
//! ```

pub mod bumper;
pub mod config;
pub mod error;
pub mod formatter;
pub mod rewrite;
pub mod utils;

pub use bumper::{BumpSummary, Bumper};
pub use config::BumpConfig;
pub use error::{Error, Result};
pub use formatter::{Bpfmt, Formatter};
