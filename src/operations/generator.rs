//! Containerized generator invocation
//!
//! The container run is ephemeral (`--rm`) and the invoking identity is
//! passed as UID/GID environment variables so entrypoint wrappers inside the
//! generator image can drop privileges before writing into the mount.
//! The workspace root is mounted at `/local`; spec and output paths are
//! expressed relative to it.

use crate::error::Result;
use crate::operations::{Session, output_dir};
use crate::process::ToolCommand;
use crate::ui;

/// Mount point of the workspace root inside the generator container
const CONTAINER_MOUNT: &str = "/local";

/// Run the containerized generator, guarding the output directory first
pub fn run(session: &Session) -> Result<()> {
    output_dir::guard(session)?;

    let command = generate_command(session);
    session.invoke_spinning(
        &command,
        &format!(
            "Generating {} client from {}",
            session.project.config.generator.generator, session.project.config.spec
        ),
    )?;

    ui::success(&format!(
        "Client generated into {}",
        session.project.output_dir().display()
    ));
    Ok(())
}

fn generate_command(session: &Session) -> ToolCommand {
    let project = &session.project;
    let config = &project.config;
    let generator = &config.generator;

    ToolCommand::new(&config.tools.container_runtime)
        .args(["run", "--rm"])
        .arg("-e")
        .arg(format!("UID={}", session.identity.uid))
        .arg("-e")
        .arg(format!("GID={}", session.identity.gid))
        .arg("-v")
        .arg(format!("{}:{}", project.root.display(), CONTAINER_MOUNT))
        .arg(&generator.image)
        .arg("generate")
        .arg("-i")
        .arg(format!("{}/{}", CONTAINER_MOUNT, config.spec))
        .arg("-g")
        .arg(&generator.generator)
        .arg("-o")
        .arg(format!("{}/{}", CONTAINER_MOUNT, config.output_dir))
        .args(&generator.extra_args)
        .current_dir(&project.root)
}
