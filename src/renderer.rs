//! Template renderer and in-place template evaluation.
//! Templated files of the generated project are MiniJinja templates
//! rendered against the computed field mapping.
use crate::error::{Error, Result};
use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on undefined variables and keeps
    /// the trailing newline of the template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or
    ///   references a field missing from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}

/// Renders the file at `path` against `context` and overwrites it with the result.
///
/// # Errors
/// * `Error::TemplateEvaluationError` naming `path` if rendering fails
/// * `Error::FileError` if the file cannot be read or written
pub fn write_template<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    path: P,
    context: &serde_json::Value,
) -> Result<()> {
    let path = path.as_ref();
    debug!("Evaluating template: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| Error::file("read", path, e))?;
    let rendered = renderer.render(&content, context).map_err(|e| match e {
        Error::MinijinjaError(source) => {
            Error::TemplateEvaluationError { path: path.display().to_string(), source }
        }
        other => other,
    })?;

    fs::write(path, rendered).map_err(|e| Error::file("write", path, e))
}
