//! Clean command: uninstall, then delete generated files
//!
//! The sentinel file is always preserved so the output directory stays
//! tracked in version control when empty.

use crate::cli::{CleanArgs, GlobalOptions};
use crate::error::Result;
use crate::operations::{output_dir, package};
use crate::ui;

pub fn run(globals: &GlobalOptions, args: CleanArgs) -> Result<()> {
    let session = super::open_session(globals)?;

    package::uninstall(&session)?;

    if !args.yes && !args.dry_run {
        let dir = session.project.output_dir();
        let confirmed = inquire::Confirm::new(&format!(
            "Remove all generated files under {}?",
            dir.display()
        ))
        .with_default(false)
        .prompt()?;

        if !confirmed {
            ui::skip("Clean aborted.");
            return Ok(());
        }
    }

    output_dir::clean(&session, args.dry_run)
}
