//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clientgen - containerized OpenAPI client build orchestrator
///
/// Generates an API client with a containerized OpenAPI generator and manages
/// the virtual environment the generated package is installed into.
#[derive(Parser, Debug)]
#[command(
    name = "clientgen",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build orchestrator for containerized OpenAPI client generation",
    long_about = "clientgen sequences the client build lifecycle: it guards the generator \
                  output directory, runs the containerized OpenAPI generator ephemerally, \
                  and installs the generated package into a project-local virtual \
                  environment in editable mode.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  clientgen                        \x1b[90m# Generate then install (default)\x1b[0m\n   \
                  clientgen run-generator          \x1b[90m# Regenerate the client only\x1b[0m\n   \
                  clientgen install-package        \x1b[90m# Install into the virtual environment\x1b[0m\n   \
                  clientgen clean -y               \x1b[90m# Uninstall and delete generated files\x1b[0m\n   \
                  clientgen clean --dry-run        \x1b[90m# Show what clean would delete\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to searching upward from the current directory)
    #[arg(long, short = 'w', global = true, env = "CLIENTGEN_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output (echoes external command lines)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the invoking user id propagated to the generator container
    #[arg(long, global = true, env = "CLIENTGEN_UID", value_name = "UID")]
    pub uid: Option<u32>,

    /// Override the invoking group id propagated to the generator container
    #[arg(long, global = true, env = "CLIENTGEN_GID", value_name = "GID")]
    pub gid: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the generator, then install the package (the default)
    All,

    /// Create the virtual environment if it does not exist
    PrepareEnvironment,

    /// Create the output directory and fix its ownership
    GuardDirectory,

    /// Run the containerized generator into the guarded directory
    RunGenerator,

    /// Install the generated package and its dependencies
    InstallPackage,

    /// Uninstall the generated package (skips when not installed)
    UninstallPackage,

    /// Uninstall, then delete generated files (the sentinel is kept)
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub workspace: Option<PathBuf>,
    pub verbose: bool,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
}

impl Cli {
    pub fn globals(&self) -> GlobalOptions {
        GlobalOptions {
            workspace: self.workspace.clone(),
            verbose: self.verbose,
            uid: self.uid,
            gid: self.gid,
        }
    }
}
