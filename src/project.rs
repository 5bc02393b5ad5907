//! Project root discovery and well-known paths

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{ClientgenError, Result};

/// An opened project: a workspace root plus its configuration
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Detect if a project configuration exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(config::CONFIG_FILE).is_file()
    }

    /// Find a project by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open a project at the given root
    ///
    /// The root must exist; the configuration file is optional.
    pub fn open(root: &Path) -> Result<Self> {
        let root = dunce::canonicalize(root).map_err(|_| ClientgenError::WorkspaceNotFound {
            path: root.display().to_string(),
        })?;

        let config = Config::load(&root)?;

        Ok(Self { root, config })
    }

    /// Resolve the project for a command invocation
    ///
    /// An explicit `--workspace` path is used as-is. Otherwise the search walks
    /// upward from the current directory for a `clientgen.yaml`; when none is
    /// found the current directory itself becomes the root, with defaults.
    pub fn locate(workspace: Option<PathBuf>) -> Result<Self> {
        match workspace {
            Some(path) => Self::open(&path),
            None => {
                let cwd = std::env::current_dir().map_err(|e| ClientgenError::IoError {
                    message: format!("Failed to get current directory: {}", e),
                })?;
                let root = Self::find_from(&cwd).unwrap_or(cwd);
                Self::open(&root)
            }
        }
    }

    /// Directory the generator writes into
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_dir)
    }

    /// Virtual environment directory
    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(&self.config.venv_dir)
    }

    /// Dependency manifest path
    pub fn requirements(&self) -> PathBuf {
        self.root.join(&self.config.requirements)
    }

    /// Sentinel file inside the output directory
    pub fn sentinel(&self) -> PathBuf {
        self.output_dir().join(&self.config.sentinel)
    }

    /// The pip executable inside the virtual environment
    pub fn venv_pip(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir().join("Scripts").join("pip.exe")
        } else {
            self.venv_dir().join("bin").join("pip")
        }
    }
}
