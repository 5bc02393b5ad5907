//! Command implementations for the clientgen CLI
//!
//! Each command is a thin wrapper: open a session from the global options,
//! then delegate to the operations layer.

pub mod all;
pub mod clean;
pub mod completions;
pub mod generate;
pub mod guard;
pub mod install;
pub mod prepare;
pub mod uninstall;

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::Session;
use crate::ownership::Identity;
use crate::process::SystemRunner;
use crate::project::Project;

/// Open a session for a command invocation
pub(crate) fn open_session(globals: &GlobalOptions) -> Result<Session> {
    let project = Project::locate(globals.workspace.clone())?;
    let identity = Identity::resolve(globals.uid, globals.gid);

    Ok(Session {
        project,
        identity,
        verbose: globals.verbose,
        runner: Box::new(SystemRunner),
    })
}
