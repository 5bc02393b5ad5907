//! File ownership inspection and repair
//!
//! The generator container writes as whatever user the image runs; the
//! guardian brings the output tree back to the invoking user so later steps
//! (editable install, clean) work without privileges. Ownership is compared
//! as a joint (uid, gid) pair: a partial match still triggers a full fix.

use std::path::Path;

use crate::error::{ClientgenError, Result};

/// The invoking user's identity, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
}

impl Identity {
    /// Resolve the identity, preferring explicit overrides
    pub fn resolve(uid: Option<u32>, gid: Option<u32>) -> Self {
        let current = Self::current();
        Self {
            uid: uid.unwrap_or(current.uid),
            gid: gid.unwrap_or(current.gid),
        }
    }

    #[cfg(unix)]
    fn current() -> Self {
        Self {
            uid: nix::unistd::getuid().as_raw(),
            gid: nix::unistd::getgid().as_raw(),
        }
    }

    #[cfg(not(unix))]
    fn current() -> Self {
        Self { uid: 0, gid: 0 }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.uid, self.gid)
    }
}

/// Read the (uid, gid) owner of a path
#[cfg(unix)]
pub fn owner_of(path: &Path) -> Result<(u32, u32)> {
    use std::os::unix::fs::MetadataExt;

    let meta = std::fs::metadata(path).map_err(|e| ClientgenError::OwnershipInspectFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok((meta.uid(), meta.gid()))
}

#[cfg(not(unix))]
pub fn owner_of(_path: &Path) -> Result<(u32, u32)> {
    Ok((0, 0))
}

/// Whether an owner pair jointly matches the identity
pub fn matches(owner: (u32, u32), identity: Identity) -> bool {
    owner == (identity.uid, identity.gid)
}

/// Recursively change ownership of a tree to the identity
///
/// Covers the root itself and every entry below it. Any single failure is
/// terminal; partial fixes are not rolled back.
#[cfg(unix)]
pub fn fix_tree(root: &Path, identity: Identity) -> Result<()> {
    use nix::unistd::{Gid, Uid, chown};
    use walkdir::WalkDir;

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| ClientgenError::OwnershipFixFailed {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;

        chown(
            entry.path(),
            Some(Uid::from_raw(identity.uid)),
            Some(Gid::from_raw(identity.gid)),
        )
        .map_err(|e| ClientgenError::OwnershipFixFailed {
            path: entry.path().display().to_string(),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}

#[cfg(not(unix))]
pub fn fix_tree(_root: &Path, _identity: Identity) -> Result<()> {
    Ok(())
}
