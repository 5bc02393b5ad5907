//! Task operations sequenced by the CLI commands
//!
//! Each operation is one step of the generation lifecycle:
//! - environment: prepare the virtual environment
//! - output_dir: guard and clean the generator output directory
//! - generator: run the containerized generator
//! - package: install and uninstall the generated package
//!
//! Operations share a [`Session`]: the opened project, the resolved invoking
//! identity, and the tool runner. Command wrappers build the session; tests
//! build one around a recording runner.

pub mod environment;
pub mod generator;
pub mod output_dir;
pub mod package;

use crate::error::Result;
use crate::ownership::Identity;
use crate::process::{self, ToolCommand, ToolOutput, ToolRunner};
use crate::progress::Spinner;
use crate::project::Project;
use crate::ui;

/// Shared state for one command invocation
pub struct Session {
    pub project: Project,
    pub identity: Identity,
    pub verbose: bool,
    pub runner: Box<dyn ToolRunner>,
}

impl Session {
    /// Run a tool; non-zero exit is fatal
    pub fn invoke(&self, command: &ToolCommand) -> Result<ToolOutput> {
        if self.verbose {
            ui::command_echo(&command.rendered());
        }
        process::run_checked(self.runner.as_ref(), command)
    }

    /// Run a tool behind a spinner; non-zero exit is fatal
    pub fn invoke_spinning(&self, command: &ToolCommand, message: &str) -> Result<ToolOutput> {
        if self.verbose {
            ui::command_echo(&command.rendered());
        }

        let spinner = Spinner::new(message);
        let output = match self.runner.run(command) {
            Ok(output) => output,
            Err(e) => {
                spinner.abandon();
                return Err(e);
            }
        };

        if !output.success() {
            spinner.abandon();
            return Err(process::failure(command, &output));
        }

        spinner.finish();
        Ok(output)
    }

    /// Run a tool as a query; the exit status is the answer, never fatal
    pub fn query(&self, command: &ToolCommand) -> Result<ToolOutput> {
        if self.verbose {
            ui::command_echo(&command.rendered());
        }
        self.runner.run(command)
    }
}
