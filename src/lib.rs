//! create-component scaffolds React component and hook libraries.
//! It copies a template directory into a new project, names the package and
//! renders the exported component or hook into the template sources.

/// Question flow and collected answers
pub mod answers;

/// Command-line interface module
pub mod cli;

/// Scaffold configuration shipped with a template
/// Supports JSON and YAML formats (scaffold.json, scaffold.yml, scaffold.yaml)
pub mod config;

/// Fixed file names, defaults and literals
pub mod constants;

/// Recursive copy and emptying of directories
pub mod copier;

/// package.json loading and rewriting
pub mod descriptor;

/// Error types and handling
pub mod error;

/// Field mapping rendered into templated files
pub mod fields;

/// Template directory resolution
pub mod loader;

/// Package name and identifier transformations
pub mod naming;

/// Package manager detection and next-step instructions
pub mod package_manager;

/// Core scaffold orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering and in-place evaluation of templated files
pub mod renderer;

/// Git repository initialisation
pub mod vcs;
