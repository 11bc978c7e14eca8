//! Scaffold orchestration.
//! Turns the template directory and the collected answers into the
//! generated project, one step after the other.

use crate::answers::Answers;
use crate::config::ScaffoldConfig;
use crate::constants::{CONFIG_FILES, DESCRIPTOR_FILE, README_FILE, RENAME_FILES};
use crate::copier::{copy_dir_except, empty_dir, is_empty_dir};
use crate::descriptor::{apply_project_identity, load_descriptor, write_descriptor};
use crate::error::{Error, Result};
use crate::fields::FieldMapping;
use crate::naming::to_valid_component_name;
use crate::renderer::{write_template, TemplateRenderer};
use crate::vcs::init_repository;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful scaffold run.
#[derive(Debug)]
pub struct ScaffoldSummary {
    pub root: PathBuf,
    pub fields: FieldMapping,
    /// `None` when no repository was requested
    pub git_initialized: Option<bool>,
}

/// Generates projects from one template.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    config: &'a ScaffoldConfig,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        config: &'a ScaffoldConfig,
    ) -> Self {
        Self { engine, template_root, config }
    }

    /// Generates the project described by `answers` into `root`.
    ///
    /// Nothing is written when `root` is not empty and `answers.overwrite`
    /// is false. A failure past that point leaves the partial output on disk.
    pub fn process(&self, answers: &Answers, root: &Path) -> Result<ScaffoldSummary> {
        prepare_destination(root, answers.overwrite)?;
        self.copy_template_tree(root)?;

        let descriptor = apply_project_identity(
            load_descriptor(self.template_root)?,
            &answers.package_name,
            &answers.contributors,
            &answers.project_name,
        );
        write_descriptor(root, &descriptor)?;

        let fields = self.compute_fields(&answers.package_name)?;
        let context = fields.to_context();
        for file in &self.config.templated_files {
            write_template(self.engine, root.join(file), &context)?;
        }

        rewrite_readme(root, &self.config.readme_placeholder, &answers.package_name)?;

        let git_initialized = answers.git_init.then(|| match init_repository(root) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not initialise a git repository: {e}");
                false
            }
        });

        Ok(ScaffoldSummary { root: root.to_path_buf(), fields, git_initialized })
    }

    fn copy_template_tree(&self, root: &Path) -> Result<()> {
        let mut excluded = vec![DESCRIPTOR_FILE];
        excluded.extend(CONFIG_FILES);
        copy_dir_except(self.template_root, root, &excluded)?;

        for (shipped, canonical) in RENAME_FILES {
            let from = root.join(shipped);
            if from.exists() {
                let to = root.join(canonical);
                debug!("Renaming '{}' to '{}'", from.display(), to.display());
                fs::rename(&from, &to).map_err(|e| Error::file("rename", &from, e))?;
            }
        }
        Ok(())
    }

    /// Computes the field mapping for a package name.
    pub fn compute_fields(&self, package_name: &str) -> Result<FieldMapping> {
        let identifier = to_valid_component_name(package_name);
        let publish_dir = self.engine.render(
            &self.config.publish_dir_template,
            &serde_json::json!({
                "packageName": package_name,
                "componentName": identifier,
            }),
        )?;
        Ok(FieldMapping::new(&identifier, publish_dir))
    }
}

/// Makes `root` ready to receive the generated project.
///
/// # Errors
/// * `Error::OutputDirectoryNotEmptyError` if `root` holds files and
///   `overwrite` is false
pub fn prepare_destination(root: &Path, overwrite: bool) -> Result<()> {
    if !root.exists() {
        debug!("Creating {}", root.display());
        return fs::create_dir_all(root).map_err(|e| Error::file("create directory", root, e));
    }
    if is_empty_dir(root)? {
        return Ok(());
    }
    if !overwrite {
        return Err(Error::OutputDirectoryNotEmptyError { output_dir: root.display().to_string() });
    }
    empty_dir(root)
}

/// Replaces the first occurrence of `placeholder` in the README of `root`.
pub fn rewrite_readme(root: &Path, placeholder: &str, project_name: &str) -> Result<()> {
    let path = root.join(README_FILE);
    if !path.exists() {
        debug!("No {} to rewrite", README_FILE);
        return Ok(());
    }
    let content = fs::read_to_string(&path).map_err(|e| Error::file("read", &path, e))?;
    fs::write(&path, content.replacen(placeholder, project_name, 1))
        .map_err(|e| Error::file("write", &path, e))
}
