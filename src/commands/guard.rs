//! Guard-directory command

use crate::cli::GlobalOptions;
use crate::error::Result;
use crate::operations::output_dir;

pub fn run(globals: &GlobalOptions) -> Result<()> {
    let session = super::open_session(globals)?;
    output_dir::guard(&session)
}
