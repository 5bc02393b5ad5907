//! Uninstall-package command

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::package;

pub fn run(globals: &GlobalOptions) -> Result<()> {
    let session = super::open_session(globals)?;
    package::uninstall(&session)
}
