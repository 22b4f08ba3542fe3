//! In-place text substitutions applied to each copied config file.

pub mod copyright;
pub mod module_name;

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub use copyright::normalize_copyright_year;
pub use module_name::ModuleNameRewriter;

/// Applies the copyright and module-name substitutions to `path`.
///
/// The file is only written back when its content changed. Returns whether a
/// write happened.
///
/// ### Parameters
/// - `path`: The file to rewrite
/// - `year`: The year stamped into copyright notices
/// - `names`: The module-name rewriter for this release pair
///
pub fn rewrite_file(path: &Path, year: i32, names: &ModuleNameRewriter) -> Result<bool> {
    let original = fs::read(path).map_err(|e| Error::io("Failed to read", path, e))?;

    let dated = normalize_copyright_year(&original, year);
    let renamed = names.apply(&dated);

    if renamed.as_ref() == original.as_slice() {
        return Ok(false);
    }

    fs::write(path, renamed.as_ref()).map_err(|e| Error::io("Failed to write", path, e))?;
    Ok(true)
}
