use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between argument errors
/// and failures while building the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph built and presented
    Success = 0,
    /// Application error (missing assets file, malformed snapshot, cycle, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency graph construction.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("project.assets.json file not found: {path}\n\n💡 Hint: {suggestion}")]
    AssetsNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse project.assets.json file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file was produced by a NuGet restore")]
    AssetsParseError { path: PathBuf, details: String },

    #[error("Lock file is missing its {section} section\n\n💡 Hint: Run a restore again; a partial snapshot would produce a misleading graph")]
    MissingStructure { section: String },

    #[error("Target framework '{requested}' not found in lock file\nAvailable: {available}\n\n💡 Hint: Pass one of the available frameworks with --framework")]
    TargetFrameworkNotFound { requested: String, available: String },

    #[error("Package '{key}' not found in the dependency graph\n\n💡 Hint: Use '<name>/<version>' with the resolved version, or just '<name>'")]
    PackageNotFound { key: String },

    #[error("Dependency cycle detected: {}", .path.join(" -> "))]
    DependencyCycle { path: Vec<String> },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a project directory or a project.assets.json file")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
