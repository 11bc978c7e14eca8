//! Command-line interface implementation for create-component.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for create-component.
#[derive(Parser, Debug)]
#[command(author, version, about = "Scaffold a React component or hook library", long_about = None)]
pub struct Args {
    /// Directory the project is created in, also the default project name
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<String>,

    /// Template directory to use instead of the shipped one
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Remove existing files in a non-empty target directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Accept the default answer of every question
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
