//! Recursive materialization of the template tree.

use crate::constants::VCS_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies `src` to `dest`.
///
/// Directories are copied recursively, files byte for byte. Missing
/// destination directories are created along the way.
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let metadata = fs::metadata(src).map_err(|e| Error::file("read metadata of", src, e))?;

    if metadata.is_dir() {
        copy_dir(src, dest)
    } else {
        copy_file(src, dest)
    }
}

/// Copies every top-level entry of `src` into `dest`, except the entries
/// whose file name is listed in `excluded`.
pub fn copy_dir_except<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dest: Q,
    excluded: &[&str],
) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    fs::create_dir_all(dest).map_err(|e| Error::file("create directory", dest, e))?;

    for entry in fs::read_dir(src).map_err(|e| Error::file("read directory", src, e))? {
        let entry = entry.map_err(|e| Error::file("read directory", src, e))?;
        let name = entry.file_name();
        if excluded.iter().any(|excluded| name == *excluded) {
            debug!("Skipping '{}'", entry.path().display());
            continue;
        }
        copy(entry.path(), dest.join(&name))?;
    }

    Ok(())
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for dir_entry in WalkDir::new(src) {
        let entry = dir_entry.map_err(|e| Error::file("walk", src, e.into()))?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::file("create directory", &target, e))?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::file("create directory", parent, e))?;
    }
    debug!("Copying file: {}", dest.display());
    fs::copy(src, dest).map(|_| ()).map_err(|e| Error::file("copy", src, e))
}

/// Removes everything inside `dir` but keeps `dir` itself.
/// Does nothing when `dir` does not exist.
pub fn empty_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| Error::file("read directory", dir, e))? {
        let path = entry.map_err(|e| Error::file("read directory", dir, e))?.path();
        let file_type = fs::symlink_metadata(&path)
            .map_err(|e| Error::file("read metadata of", &path, e))?
            .file_type();

        debug!("Removing '{}'", path.display());
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| Error::file("remove directory", &path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| Error::file("remove file", &path, e))?;
        }
    }

    Ok(())
}

/// Returns true if `dir` has no entries, or its only entry is the
/// version-control metadata directory.
pub fn is_empty_dir<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::file("read directory", dir, e))? {
        names.push(entry.map_err(|e| Error::file("read directory", dir, e))?.file_name());
        if names.len() > 1 {
            return Ok(false);
        }
    }

    Ok(match names.as_slice() {
        [] => true,
        [only] => only == VCS_DIR,
        _ => false,
    })
}
