//! Common test utilities for clientgen integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        // The binary canonicalizes the workspace root; match it here so
        // recorded tool logs compare equal on platforms with symlinked temp
        let path = std::fs::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write clientgen.yaml at the project root
    pub fn write_config(&self, content: &str) {
        self.write_file("clientgen.yaml", content);
    }

    /// Write an executable script in the project
    #[cfg(unix)]
    pub fn write_executable(&self, path: &str, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.write_file(path, content);
        let file_path = self.path.join(path);
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
        file_path
    }

    /// Write a stub tool that appends its arguments to `<name>.log` and exits 0
    #[cfg(unix)]
    pub fn stub_tool(&self, name: &str) -> PathBuf {
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}/{}.log\"\nexit 0\n",
            self.path.display(),
            name
        );
        self.write_executable(&format!("bin/{}", name), &script)
    }

    /// Read a stub tool's recorded invocations, one line per run
    pub fn tool_log(&self, name: &str) -> Vec<String> {
        let log_path = self.path.join(format!("{}.log", name));
        if !log_path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(&log_path)
            .expect("Failed to read tool log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// List the entry names of a directory in the project, sorted
    pub fn dir_entries(&self, path: &str) -> Vec<String> {
        let mut entries: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        entries.sort();
        entries
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a clientgen command bound to the project's workspace
#[allow(dead_code)]
pub fn clientgen_cmd(project: &TestProject) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("clientgen").expect("binary built");
    // Ignore any developer overrides during tests
    cmd.env_remove("CLIENTGEN_WORKSPACE");
    cmd.env_remove("CLIENTGEN_UID");
    cmd.env_remove("CLIENTGEN_GID");
    cmd.arg("-w").arg(&project.path);
    cmd
}

/// Build a clientgen command with no workspace flag (discovery tests)
#[allow(dead_code)]
pub fn clientgen_cmd_bare() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("clientgen").expect("binary built");
    cmd.env_remove("CLIENTGEN_WORKSPACE");
    cmd.env_remove("CLIENTGEN_UID");
    cmd.env_remove("CLIENTGEN_GID");
    cmd
}
