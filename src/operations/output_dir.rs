//! Output directory guardianship and cleanup
//!
//! The guardian ensures the directory exists and is owned by the invoking
//! identity before the generator mounts it. Cleanup removes generated files
//! while preserving the sentinel that keeps the directory tracked in version
//! control.

use std::path::Path;

use crate::error::{ClientgenError, Result};
use crate::operations::Session;
use crate::ownership;
use crate::ui;

/// Ensure the output directory exists and is owned by the invoking identity
pub fn guard(session: &Session) -> Result<()> {
    let dir = session.project.output_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ClientgenError::DirectoryCreateFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        ui::info(&format!("Created output directory {}", dir.display()));
    }

    let owner = ownership::owner_of(&dir)?;
    if ownership::matches(owner, session.identity) {
        if session.verbose {
            ui::info("Output directory ownership already correct.");
        }
    } else {
        ui::info(&format!(
            "Fixing ownership of {} to {}",
            dir.display(),
            session.identity
        ));
        ownership::fix_tree(&dir, session.identity)?;
    }

    ui::success(&format!("Output directory ready at {}", dir.display()));
    Ok(())
}

/// Remove everything under the output directory except the sentinel file
///
/// Succeeds when the directory is already clean or missing entirely.
pub fn clean(session: &Session, dry_run: bool) -> Result<()> {
    let dir = session.project.output_dir();

    if !dir.exists() {
        ui::skip(&format!(
            "Output directory {} does not exist; nothing to clean.",
            dir.display()
        ));
        return Ok(());
    }

    let removed = purge_except(&dir, &session.project.config.sentinel, dry_run)?;

    if removed == 0 {
        ui::skip(&format!("{} is already clean.", dir.display()));
    } else if dry_run {
        ui::info(&format!(
            "Would remove {} entries from {} (keeping {})",
            removed,
            dir.display(),
            session.project.config.sentinel
        ));
    } else {
        ui::success(&format!(
            "Removed {} entries from {} (kept {})",
            removed,
            dir.display(),
            session.project.config.sentinel
        ));
    }

    Ok(())
}

fn purge_except(dir: &Path, sentinel: &str, dry_run: bool) -> Result<usize> {
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;

        if entry.file_name().to_string_lossy() == sentinel {
            continue;
        }

        let path = entry.path();

        if dry_run {
            ui::info(&format!("Would remove {}", path.display()));
            removed += 1;
            continue;
        }

        // file_type() does not follow symlinks, so a link to a directory is
        // removed as a file rather than traversed
        let result = if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };

        result.map_err(|e| ClientgenError::RemoveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        removed += 1;
    }

    Ok(removed)
}
