//! Common constants used throughout create-component.

/// Target directory used when none is given on the command line
pub const DEFAULT_TARGET_DIR: &str = "create-components-project";

/// Contributor used for GitHub URLs when none is supplied
pub const DEFAULT_CONTRIBUTORS: &str = "github-user";

/// Package descriptor of the template and of the generated project
pub const DESCRIPTOR_FILE: &str = "package.json";

/// License stamped onto every generated descriptor
pub const LICENSE: &str = "MIT";

/// Supported scaffold configuration file names
pub const CONFIG_FILES: [&str; 3] = ["scaffold.json", "scaffold.yml", "scaffold.yaml"];

/// Files shipped under an alternate name so that packaging does not drop them,
/// paired with the name they get in the generated project.
pub const RENAME_FILES: [(&str, &str); 1] = [("_gitignore", ".gitignore")];

/// Version-control metadata directory tolerated in an otherwise empty target
pub const VCS_DIR: &str = ".git";

pub const README_FILE: &str = "README.md";

/// Name of the directory holding the shipped template
pub const TEMPLATE_DIR: &str = "template";

/// Environment variable package managers use to announce themselves
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";
