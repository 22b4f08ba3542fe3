//! Release bumper.
//!
//! Copies `kernel/configs/<current>` to `kernel/configs/<next>` and rewrites
//! the files directly inside each `android-*` directory of the copy:
//! copyright years are moved to the current year, `kernel_config_<current>_*`
//! module names are renamed, and `Android.bp` files are formatted when the
//! formatter is installed.

pub mod copy;

use crate::config::{ARCH_PREFIX, BLUEPRINT_FILE, BumpConfig};
use crate::error::{Error, Result};
use crate::formatter::{Bpfmt, Formatter, unavailable_notice};
use crate::rewrite::{ModuleNameRewriter, rewrite_file};
use crate::utils::fs as ufs;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::spinner;
use chrono::Datelike;
use std::ffi::OsString;
use std::path::Path;

/// What a [`Bumper::run`] touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpSummary {
    pub bytes_copied: u64,
    pub files_seen: usize,
    pub files_changed: usize,
    pub files_formatted: usize,
    pub files_unformatted: usize,
}

pub struct Bumper<F: Formatter = Bpfmt> {
    config: BumpConfig,
    versions: Vec<OsString>,
    names: ModuleNameRewriter,
    formatter: F,
    year: Option<i32>,
}

impl Bumper<Bpfmt> {
    /// Creates a bumper that formats blueprints with `bpfmt`.
    pub fn new(config: BumpConfig) -> Result<Self> {
        Self::with_formatter(config, Bpfmt::new())
    }
}

impl<F: Formatter> Bumper<F> {
    /// Creates a bumper and enumerates the architecture directories of the
    /// current release.
    ///
    /// ### Parameters
    /// - `config`: The resolved run configuration
    /// - `formatter`: The blueprint formatter
    ///
    pub fn with_formatter(config: BumpConfig, formatter: F) -> Result<Self> {
        let current_dir = config.current_release_dir();
        let mut versions = ufs::list_prefixed_entries(&current_dir, ARCH_PREFIX).map_err(|source| {
            Error::DirectoryNotFound {
                path: current_dir.clone(),
                source,
            }
        })?;
        versions.sort();

        let names = ModuleNameRewriter::new(&config.current, &config.next);
        Ok(Bumper {
            config,
            versions,
            names,
            formatter,
            year: None,
        })
    }

    /// Pins the year written into copyright notices instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Architecture directory names found under the current release.
    pub fn versions(&self) -> &[OsString] {
        &self.versions
    }

    pub fn run(&self) -> Result<BumpSummary> {
        let logger = Logger::new();
        let from = self.config.current_release_dir();
        let to = self.config.new_release_dir();
        logger.log_message(
            LogLevel::Info,
            &format!(
                "Found {} architecture directories under {}",
                self.versions.len(),
                from.display()
            ),
        );

        let mut summary = BumpSummary {
            bytes_copied: spinner::run_step(
                &format!("Copying {} to {}", from.display(), to.display()),
                |bytes| format!("Copied {} ({} bytes)", to.display(), bytes),
                || copy::copy_release_tree(&from, &to),
            )?,
            ..BumpSummary::default()
        };

        for version in &self.versions {
            let dst = to.join(version);
            logger.log_message(LogLevel::Info, &format!("Updating {}", dst.display()));

            let files = ufs::list_regular_files(&dst).map_err(|e| Error::io("Failed to list", &dst, e))?;
            for file in files {
                summary.files_seen += 1;
                let year = self.year.unwrap_or_else(current_year);
                if rewrite_file(&file, year, &self.names)? {
                    summary.files_changed += 1;
                }

                if is_blueprint(&file) {
                    if self.formatter.is_available() {
                        self.formatter.format(&file)?;
                        summary.files_formatted += 1;
                    } else {
                        logger.log_message(LogLevel::Warning, &unavailable_notice(&file));
                        summary.files_unformatted += 1;
                    }
                }
            }
        }

        logger.log_message(
            LogLevel::Success,
            &format!(
                "Release {} created from {} ({} of {} files updated)",
                self.config.next, self.config.current, summary.files_changed, summary.files_seen
            ),
        );
        Ok(summary)
    }
}

fn is_blueprint(path: &Path) -> bool {
    path.file_name().map(|n| n == BLUEPRINT_FILE).unwrap_or(false)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
