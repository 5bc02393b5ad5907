//! Error types and handling for clientgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every failure here is terminal: the sequence halts at the first error and
//! the diagnostic is surfaced to the operator. The one deliberate non-error is
//! uninstalling a package that is not installed, which is reported as a skip
//! by the package operation and never reaches this type.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for clientgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum ClientgenError {
    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(clientgen::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(clientgen::config::parse_failed),
        help("Check that clientgen.yaml is valid YAML")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(clientgen::workspace::not_found),
        help("Pass an existing directory with --workspace or run from inside the project")
    )]
    WorkspaceNotFound { path: String },

    // Setup errors
    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(clientgen::fs::create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to inspect ownership of: {path}")]
    #[diagnostic(code(clientgen::fs::owner_inspect_failed))]
    OwnershipInspectFailed { path: String, reason: String },

    #[error("Failed to change ownership of: {path}")]
    #[diagnostic(
        code(clientgen::fs::owner_fix_failed),
        help("Changing ownership may require elevated privileges")
    )]
    OwnershipFixFailed { path: String, reason: String },

    #[error("Failed to remove: {path}")]
    #[diagnostic(code(clientgen::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    // External tool errors
    #[error("Failed to launch '{tool}': {reason}")]
    #[diagnostic(
        code(clientgen::tool::not_found),
        help("Check that the tool is installed and on PATH, or set its path in clientgen.yaml")
    )]
    ToolNotFound { tool: String, reason: String },

    #[error("'{tool}' exited with status {status}")]
    #[diagnostic(
        code(clientgen::tool::failed),
        help("Inspect the tool output above; the sequence halts at the first failure")
    )]
    ToolFailed { tool: String, status: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(clientgen::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ClientgenError {
    fn from(err: std::io::Error) -> Self {
        ClientgenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ClientgenError {
    fn from(err: inquire::InquireError) -> Self {
        ClientgenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ClientgenError {
    fn from(err: serde_yaml::Error) -> Self {
        ClientgenError::ConfigParseFailed {
            path: crate::config::CONFIG_FILE.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ClientgenError>;
