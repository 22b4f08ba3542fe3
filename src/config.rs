//! Run configuration.
//!
//! Everything the bumper needs to know about the surrounding tree is gathered
//! here once, at startup. The process environment is only consulted by
//! [`BumpConfig::from_env`]; [`BumpConfig::from_lookup`] takes any lookup
//! function so callers can supply values explicitly.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the root of the source tree.
pub const BUILD_TOP_ENV: &str = "ANDROID_BUILD_TOP";

/// Location of the per-release config folders, relative to the tree root.
pub const CONFIGS_SUBDIR: &str = "kernel/configs";

/// Name prefix of the architecture subdirectories that get rewritten.
pub const ARCH_PREFIX: &str = "android-";

/// Blueprint file handed to the formatter after substitution.
pub const BLUEPRINT_FILE: &str = "Android.bp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    pub build_top: PathBuf,
    pub current: String,
    pub next: String,
}

impl BumpConfig {
    /// Builds the configuration from the process environment.
    ///
    /// ### Parameters
    /// - `current`: The existing release label (e.g. `v`)
    /// - `next`: The release label to create (e.g. `w`)
    ///
    pub fn from_env(current: impl Into<String>, next: impl Into<String>) -> Result<Self> {
        Self::from_lookup(current, next, |key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Builds the configuration using `lookup` to resolve [`BUILD_TOP_ENV`].
    ///
    /// An unset or empty value is reported as [`Error::MissingEnvironment`].
    pub fn from_lookup<F>(current: impl Into<String>, next: impl Into<String>, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<PathBuf>,
    {
        let build_top = lookup(BUILD_TOP_ENV)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::MissingEnvironment {
                var: BUILD_TOP_ENV.to_string(),
            })?;

        Ok(BumpConfig {
            build_top,
            current: current.into(),
            next: next.into(),
        })
    }

    pub fn configs_root(&self) -> PathBuf {
        self.build_top.join(CONFIGS_SUBDIR)
    }

    pub fn current_release_dir(&self) -> PathBuf {
        self.release_dir(&self.current)
    }

    pub fn new_release_dir(&self) -> PathBuf {
        self.release_dir(&self.next)
    }

    fn release_dir(&self, label: &str) -> PathBuf {
        self.configs_root().join(Path::new(label))
    }
}
