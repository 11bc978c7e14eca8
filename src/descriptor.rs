//! Package descriptor (`package.json`) handling.
//! The template's descriptor is loaded, stamped with the identity of the new
//! project and written to the generated project root.

use crate::constants::{DESCRIPTOR_FILE, LICENSE};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Top-level descriptor object. Key order is the order found in the template.
pub type PackageDescriptor = IndexMap<String, Value>;

/// Loads the package descriptor shipped in `template_dir`.
///
/// # Returns
/// * An empty descriptor if the template carries no `package.json`
///
/// # Errors
/// * `Error::DescriptorParseError` if the file is not a JSON object
/// * `Error::FileError` if the file exists but cannot be read
pub fn load_descriptor<P: AsRef<Path>>(template_dir: P) -> Result<PackageDescriptor> {
    let path = template_dir.as_ref().join(DESCRIPTOR_FILE);
    if !path.exists() {
        warn!("Template has no {}, starting from an empty one", DESCRIPTOR_FILE);
        return Ok(PackageDescriptor::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| Error::file("read", &path, e))?;
    serde_json::from_str(&content).map_err(|source| Error::DescriptorParseError {
        path: path.display().to_string(),
        source,
    })
}

/// Stamps the project identity onto `descriptor`.
///
/// # Arguments
/// * `package_name` - Valid package name of the new project
/// * `contributors` - GitHub user or organisation owning the repository
/// * `project_name` - Project name as the user typed it
pub fn apply_project_identity(
    mut descriptor: PackageDescriptor,
    package_name: &str,
    contributors: &str,
    project_name: &str,
) -> PackageDescriptor {
    let repository = format!("https://github.com/{contributors}/{package_name}");

    descriptor.insert("name".into(), json!(package_name));
    descriptor.insert("keywords".into(), json!([project_name]));
    descriptor.insert("description".into(), json!(project_name));
    descriptor.insert("homepage".into(), json!(format!("{repository}#readme")));

    set_nested(&mut descriptor, "repository", "type", json!("git"));
    set_nested(&mut descriptor, "repository", "url", json!(format!("{repository}.git")));
    set_nested(&mut descriptor, "bugs", "url", json!(format!("{repository}/issues")));

    descriptor.insert("author".into(), json!(contributors));
    descriptor.insert("license".into(), json!(LICENSE));
    descriptor
}

// Sets `key.field`. A non-object value under `key` is replaced.
fn set_nested(descriptor: &mut PackageDescriptor, key: &str, field: &str, value: Value) {
    let entry = descriptor.entry(key.to_string()).or_insert(Value::Null);
    match entry {
        Value::Object(map) => {
            map.insert(field.to_string(), value);
        }
        other => {
            let mut map = serde_json::Map::new();
            map.insert(field.to_string(), value);
            *other = Value::Object(map);
        }
    }
}

/// Writes `descriptor` as pretty-printed JSON into `dest_dir`.
pub fn write_descriptor<P: AsRef<Path>>(dest_dir: P, descriptor: &PackageDescriptor) -> Result<()> {
    let path = dest_dir.as_ref().join(DESCRIPTOR_FILE);
    let content = serde_json::to_string_pretty(descriptor).map_err(|e| {
        Error::ConfigError(format!("Failed to serialize {}: {e}", path.display()))
    })?;

    debug!("Writing descriptor: {}", path.display());
    fs::write(&path, content + "\n").map_err(|e| Error::file("write", &path, e))
}
