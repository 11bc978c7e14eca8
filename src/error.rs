//! Error handling for create-component.
//! Defines the error type and result alias used throughout the scaffolder.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while collecting answers or generating a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A file system operation failed on a known path
    #[error("Failed to {operation} '{path}': {source}.")]
    FileError {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// A templated file of the generated project could not be rendered
    #[error("Failed to evaluate template '{path}': {source}.")]
    TemplateEvaluationError {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The template's package.json exists but is not a JSON object
    #[error("Package descriptor '{path}' is malformed: {source}.")]
    DescriptorParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Target directory '{output_dir}' is not empty. Use --force to remove existing files.")]
    OutputDirectoryNotEmptyError { output_dir: String },

    /// The user declined to remove the existing files of the target directory
    #[error("✖ Operation cancelled")]
    UserCancelled,

    /// Interactive prompt failed, usually because input was interrupted
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error together with the operation and path it happened on.
    pub fn file<P: AsRef<Path>>(operation: &'static str, path: P, source: io::Error) -> Self {
        Error::FileError { operation, path: path.as_ref().display().to_string(), source }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Default error handler that prints the error and exits the program.
///
/// Cancellation is not a failure: the message is printed and the process
/// exits with status 0. Every other error exits with status 1.
pub fn default_error_handler(err: Error) {
    match err {
        Error::UserCancelled => {
            println!("{err}");
            std::process::exit(0);
        }
        _ => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
