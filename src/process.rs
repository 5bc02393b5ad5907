//! External tool invocation
//!
//! Everything clientgen does is delegated to external tools (container
//! runtime, python, pip). The [`ToolRunner`] trait is the narrow seam between
//! operations and the operating system: run a program with args and env,
//! get back the exit status and captured output. Operations never touch
//! `std::process` directly, so tests substitute a recording fake.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{ClientgenError, Result};

/// A single external command to run
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            envs: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string()));
        self
    }

    pub fn env(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.envs
            .push((key.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Shell-style rendering for verbose echo and test assertions
    pub fn rendered(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Outcome of a tool run: exit status plus captured output
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit status rendered for error messages ("1", or "signal" when killed)
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        }
    }
}

/// Narrow process-running seam
pub trait ToolRunner {
    /// Run a command to completion, capturing stdout and stderr
    ///
    /// A non-zero exit is NOT an error here; callers that treat it as fatal
    /// go through [`run_checked`]. Only a failure to launch is an `Err`.
    fn run(&self, command: &ToolCommand) -> Result<ToolOutput>;
}

/// Runner backed by `std::process::Command`
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<ToolOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);

        for (key, value) in &command.envs {
            cmd.env(key, value);
        }

        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ClientgenError::ToolNotFound {
                tool: command.program.clone(),
                reason: e.to_string(),
            },
            _ => ClientgenError::IoError {
                message: format!("Failed to run '{}': {}", command.program, e),
            },
        })?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run a command and treat any non-zero exit as fatal
///
/// Captured output is passed through to the operator before the error is
/// returned, so the underlying tool's own message stays visible.
pub fn run_checked(runner: &dyn ToolRunner, command: &ToolCommand) -> Result<ToolOutput> {
    let output = runner.run(command)?;

    if !output.success() {
        return Err(failure(command, &output));
    }

    Ok(output)
}

/// Surface a failed tool's own output, then build the fatal error
pub fn failure(command: &ToolCommand, output: &ToolOutput) -> ClientgenError {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
    ClientgenError::ToolFailed {
        tool: command.program().to_string(),
        status: output.status_label(),
    }
}
