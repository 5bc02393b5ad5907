//! Default command: generate the client, then install it

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::{generator, package};

pub fn run(globals: &GlobalOptions) -> Result<()> {
    let session = super::open_session(globals)?;

    generator::run(&session)?;
    package::install(&session)?;

    Ok(())
}
