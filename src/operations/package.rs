//! Generated package install and removal
//!
//! All pip invocations go through the environment's own pip executable, so
//! nothing leaks into the system interpreter. Install is three sequential
//! steps with no rollback; a failure leaves whatever the last completed step
//! produced. Uninstalling an absent package is a reported skip, not an error.

use crate::error::Result;
use crate::operations::{Session, environment};
use crate::process::ToolCommand;
use crate::ui;

/// Install the generated package and its dependency manifest
pub fn install(session: &Session) -> Result<()> {
    environment::prepare(session)?;

    let project = &session.project;
    let pip = project.venv_pip().display().to_string();

    session.invoke_spinning(
        &pip_command(session, &pip).args(["install", "--upgrade", "pip"]),
        "Upgrading pip",
    )?;

    session.invoke_spinning(
        &pip_command(session, &pip)
            .args(["install", "-e"])
            .arg(project.output_dir().display().to_string()),
        &format!(
            "Installing {} in editable mode",
            project.config.package_name
        ),
    )?;

    session.invoke_spinning(
        &pip_command(session, &pip)
            .args(["install", "-r"])
            .arg(project.requirements().display().to_string()),
        &format!("Installing dependencies from {}", project.config.requirements),
    )?;

    ui::success(&format!(
        "Package '{}' installed into {}",
        project.config.package_name,
        project.venv_dir().display()
    ));
    Ok(())
}

/// Uninstall the generated package when it is installed
pub fn uninstall(session: &Session) -> Result<()> {
    let project = &session.project;
    let name = &project.config.package_name;
    let pip_path = project.venv_pip();

    if !pip_path.exists() {
        ui::skip(&format!(
            "Virtual environment not found at {}; nothing to uninstall.",
            project.venv_dir().display()
        ));
        return Ok(());
    }

    let pip = pip_path.display().to_string();

    // Query install state; a non-zero exit means "not installed"
    let probe = session.query(&pip_command(session, &pip).args(["show", "-q"]).arg(name))?;
    if !probe.success() {
        ui::skip(&format!(
            "Package '{}' is not installed; skipping uninstall.",
            name
        ));
        return Ok(());
    }

    session.invoke(&pip_command(session, &pip).args(["uninstall", "-y"]).arg(name))?;

    ui::success(&format!("Package '{}' uninstalled.", name));
    Ok(())
}

fn pip_command(session: &Session, pip: &str) -> ToolCommand {
    ToolCommand::new(pip).current_dir(&session.project.root)
}
