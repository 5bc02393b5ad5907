//! Virtual environment preparation
//!
//! Idempotent: an existing environment directory is left untouched and the
//! creation step is skipped. There is no staleness check; recreating the
//! environment is the operator's call (delete the directory and re-run).

use crate::error::Result;
use crate::operations::Session;
use crate::process::ToolCommand;
use crate::ui;

/// Ensure the virtual environment exists
pub fn prepare(session: &Session) -> Result<()> {
    let venv = session.project.venv_dir();

    if venv.exists() {
        ui::skip(&format!(
            "Virtual environment already exists at {}",
            venv.display()
        ));
        return Ok(());
    }

    let command = ToolCommand::new(&session.project.config.tools.python)
        .args(["-m", "venv"])
        .arg(venv.display().to_string())
        .current_dir(&session.project.root);

    session.invoke_spinning(
        &command,
        &format!("Creating virtual environment at {}", venv.display()),
    )?;

    ui::success(&format!("Virtual environment created at {}", venv.display()));
    Ok(())
}
