//! Template root resolution.
use crate::constants::TEMPLATE_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Returns the template directory to scaffold from.
///
/// An explicit path wins. Otherwise the `template` directory installed next
/// to the executable is used, then the one shipped with the crate sources.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the chosen directory is missing
pub fn load_template(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return ensure_template_dir(path);
    }

    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR)));
    if let Some(dir) = installed.filter(|dir| dir.is_dir()) {
        debug!("Using installed template at {}", dir.display());
        return Ok(dir);
    }

    ensure_template_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR))
}

fn ensure_template_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(Error::TemplateDoesNotExistsError { template_dir: path.display().to_string() });
    }
    debug!("Using template at {}", path.display());
    Ok(path.to_path_buf())
}
