//! Package manager detection for the instructions printed after scaffolding.

use std::path::Path;

/// Package manager that launched the scaffolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub name: String,
    pub version: Option<String>,
}

/// Parses a package manager user agent such as
/// `pnpm/8.6.0 npm/? node/v18.16.0 darwin arm64`.
pub fn pkg_from_user_agent(user_agent: Option<&str>) -> Option<PackageManager> {
    let agent = user_agent?.split(' ').next().filter(|agent| !agent.is_empty())?;
    let mut parts = agent.split('/');
    let name = parts.next()?.to_string();
    let version = parts.next().map(str::to_string);
    Some(PackageManager { name, version })
}

/// Commands the user runs to start working on the generated project.
pub fn next_steps(cwd: &Path, root: &Path, manager: Option<&PackageManager>) -> Vec<String> {
    let mut steps = Vec::new();
    if root != cwd {
        let relative = root.strip_prefix(cwd).unwrap_or(root);
        steps.push(format!("cd {}", relative.display()));
    }

    match manager.map(|m| m.name.as_str()).unwrap_or("npm") {
        "yarn" => {
            steps.push("yarn".to_string());
            steps.push("yarn dev".to_string());
        }
        name => {
            steps.push(format!("{name} install"));
            steps.push(format!("{name} run dev"));
        }
    }
    steps
}
