//! Run-generator command

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::generator;

pub fn run(globals: &GlobalOptions) -> Result<()> {
    let session = super::open_session(globals)?;
    generator::run(&session)
}
