use crate::error::{Error, Result};
use crate::utils::fs as ufs;
use filetime::FileTime;
use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

/// Copies the release directory `from` to a new directory `to`.
///
/// `to` must not exist yet; nothing is written when it does. File access and
/// modification times are carried over from `from`. Returns the number of
/// bytes copied.
///
/// ### Parameters
/// - `from`: The current release directory
/// - `to`: The new release directory
///
pub fn copy_release_tree(from: &Path, to: &Path) -> Result<u64> {
    if !from.is_dir() {
        return Err(Error::SourceMissing {
            path: from.to_path_buf(),
        });
    }
    // symlink_metadata so a dangling link still counts as taken
    if fs::symlink_metadata(to).is_ok() {
        return Err(Error::DestinationExists {
            path: to.to_path_buf(),
        });
    }

    let options = CopyOptions::new().copy_inside(true);
    let copied = fs_extra::dir::copy(from, to, &options).map_err(|source| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    copy_file_times(from, to)?;
    Ok(copied)
}

/// Stamps every file under `to` with the times of its counterpart in `from`.
fn copy_file_times(from: &Path, to: &Path) -> Result<()> {
    let files = ufs::walk_files(from).map_err(|e| Error::io("Failed to walk", from, e))?;
    for src in files {
        let Some(rel) = ufs::path_relative_to(&src, from) else {
            continue;
        };
        let dst = to.join(rel);
        let meta = fs::metadata(&src).map_err(|e| Error::io("Failed to stat", &src, e))?;
        filetime::set_file_times(
            &dst,
            FileTime::from_last_access_time(&meta),
            FileTime::from_last_modification_time(&meta),
        )
        .map_err(|e| Error::io("Failed to set times on", &dst, e))?;
    }
    Ok(())
}
