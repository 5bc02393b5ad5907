//! Prepare-environment command

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::environment;

pub fn run(globals: &GlobalOptions) -> Result<()> {
    let session = super::open_session(globals)?;
    environment::prepare(&session)
}
