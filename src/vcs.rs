//! Version-control initialisation of the generated project.

use crate::error::Result;
use log::debug;
use std::path::Path;

/// Initialises an empty git repository at `path`.
pub fn init_repository<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Initialising git repository in {}", path.display());
    git2::Repository::init(path)?;
    Ok(())
}
