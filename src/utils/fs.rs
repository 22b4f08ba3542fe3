use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Names of the entries directly under `dir` that start with `prefix`.
///
/// ### Parameters
/// - `dir`: The directory to list
/// - `prefix`: The required name prefix
///
pub fn list_prefixed_entries(dir: &Path, prefix: &str) -> io::Result<Vec<OsString>> {
    let mut names: Vec<OsString> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        if name.as_encoded_bytes().starts_with(prefix.as_bytes()) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Regular files directly inside `dir`. Subdirectories are not descended into.
///
/// ### Parameters
/// - `dir`: The directory to list
///
pub fn list_regular_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let p = entry?.path();
        if p.is_file() {
            files.push(p);
        }
    }
    Ok(files)
}

pub fn walk_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let p = entry?.path();
            if p.is_dir() {
                stack.push(p);
            } else if p.is_file() {
                files.push(p);
            }
        }
    }
    Ok(files)
}

pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(base).ok()?;
    Some(rel.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_prefixed_entries() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("android-5.10")).unwrap();
        fs::create_dir(tmp.path().join("android-6.1")).unwrap();
        fs::create_dir(tmp.path().join("build")).unwrap();
        fs::write(tmp.path().join("README.md"), "").unwrap();

        let mut names = list_prefixed_entries(tmp.path(), "android-").unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("android-5.10"), OsString::from("android-6.1")]);
    }

    #[test]
    fn test_list_prefixed_entries_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let err = list_prefixed_entries(&tmp.path().join("nope"), "android-").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_list_regular_files_is_shallow() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Android.bp"), "").unwrap();
        fs::write(tmp.path().join("android-base.config"), "").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("deep.config"), "").unwrap();

        let mut files = list_regular_files(tmp.path()).unwrap();
        files.sort();
        assert_eq!(
            files,
            vec![tmp.path().join("Android.bp"), tmp.path().join("android-base.config")]
        );
    }

    #[test]
    fn test_walk_files_recurses() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("b")).unwrap();
        fs::write(tmp.path().join("a").join("b").join("c"), "").unwrap();
        fs::write(tmp.path().join("d"), "").unwrap();

        let mut rel: Vec<PathBuf> = walk_files(tmp.path())
            .unwrap()
            .iter()
            .filter_map(|p| path_relative_to(p, tmp.path()))
            .collect();
        rel.sort();
        assert_eq!(rel, vec![PathBuf::from("a/b/c"), PathBuf::from("d")]);
    }
}
