//! Question flow feeding the scaffold.
//! Computes the default of each question, asks it through a [`Prompter`]
//! and validates the answers.

use crate::config::ScaffoldConfig;
use crate::constants::DEFAULT_CONTRIBUTORS;
use crate::copier::is_empty_dir;
use crate::error::{Error, Result};
use crate::naming::{is_valid_package_name, to_valid_package_name};
use crate::prompt::{Prompter, Validation};
use std::path::Path;

/// Answers collected for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Target directory relative to the working directory, `.` for the
    /// working directory itself
    pub target_dir: String,
    /// Project name as typed, or the working directory name for `.`
    pub project_name: String,
    /// Existing files in the target directory may be removed
    pub overwrite: bool,
    pub package_name: String,
    pub git_init: bool,
    pub contributors: String,
}

pub const PACKAGE_NAME_VALIDATION: Validation =
    Validation { check: is_valid_package_name, message: "Invalid package.json name" };

/// Trims whitespace and trailing slashes from a target directory.
pub fn format_target_dir(target_dir: &str) -> String {
    target_dir.trim().trim_end_matches('/').to_string()
}

/// Returns the project name implied by a target directory.
pub fn get_project_name(target_dir: &str, cwd: &Path) -> String {
    if target_dir == "." {
        cwd.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
    } else {
        target_dir.to_string()
    }
}

/// Asks every question of a scaffold run.
///
/// # Arguments
/// * `cwd` - Directory the target directory is relative to
/// * `default_target` - Default answer of the project name question
/// * `skip_overwrite_check` - Approve removing existing files without asking
///
/// # Errors
/// * `Error::UserCancelled` if removing the existing files is declined
pub fn collect_answers(
    prompt: &dyn Prompter,
    cwd: &Path,
    default_target: &str,
    config: &ScaffoldConfig,
    skip_overwrite_check: bool,
) -> Result<Answers> {
    let typed = prompt.input("Project name:", default_target, None)?;
    let target_dir = match format_target_dir(&typed) {
        dir if dir.is_empty() => default_target.to_string(),
        dir => dir,
    };

    let root = cwd.join(&target_dir);
    let overwrite = if root.exists() && !is_empty_dir(&root)? {
        let location = if target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{target_dir}\"")
        };
        let approved = prompt.confirm(
            skip_overwrite_check,
            &format!("{location} is not empty. Remove existing files and continue?"),
            false,
        )?;
        if !approved {
            return Err(Error::UserCancelled);
        }
        true
    } else {
        false
    };

    let project_name = get_project_name(&target_dir, cwd);
    let package_name = if is_valid_package_name(&project_name) {
        project_name.clone()
    } else {
        prompt.input(
            "Package name:",
            &to_valid_package_name(&project_name),
            Some(&PACKAGE_NAME_VALIDATION),
        )?
    };
    if !is_valid_package_name(&package_name) {
        return Err(Error::ValidationError(format!("invalid package.json name: '{package_name}'")));
    }

    let contributors = if config.include_contributors {
        prompt.input("GitHub user or organisation:", DEFAULT_CONTRIBUTORS, None)?
    } else {
        DEFAULT_CONTRIBUTORS.to_string()
    };

    let git_init = config.include_git_init
        && prompt.confirm(false, "Initialize a git repository?", true)?;

    Ok(Answers { target_dir, project_name, overwrite, package_name, git_init, contributors })
}
