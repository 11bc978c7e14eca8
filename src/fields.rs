//! Computed fields threaded into every templated file of a scaffold run.

use crate::naming::{first_upper_case, is_hook_name, to_valid_component_name};
use serde::Serialize;

/// Values available to templates.
///
/// `hook_name` and `component_name` both carry the exported identifier so that
/// templates can reference either one whatever `is_hook` says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub is_hook: bool,
    pub hook_name: String,
    pub component_name: String,
    pub hook_name_first_upper_case: String,
    pub publish_dir: String,
}

impl FieldMapping {
    /// Builds the mapping for an exported identifier.
    pub fn new<S: Into<String>>(identifier: &str, publish_dir: S) -> Self {
        Self {
            is_hook: is_hook_name(identifier),
            hook_name: identifier.to_string(),
            component_name: identifier.to_string(),
            hook_name_first_upper_case: first_upper_case(identifier),
            publish_dir: publish_dir.into(),
        }
    }

    /// Builds the mapping from a valid package name.
    pub fn from_package_name<S: Into<String>>(package_name: &str, publish_dir: S) -> Self {
        Self::new(&to_valid_component_name(package_name), publish_dir)
    }

    /// Returns the mapping as a rendering context.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::json!({
            "isHook": self.is_hook,
            "hookName": self.hook_name,
            "componentName": self.component_name,
            "hookNameFirstUpperCase": self.hook_name_first_upper_case,
            "publishDir": self.publish_dir,
        })
    }
}
