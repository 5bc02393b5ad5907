//! Test fixtures shared by unit tests
//!
//! Provides a recording [`ToolRunner`] fake and a session constructor so
//! operation tests never spawn real external tools.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use crate::error::Result;
use crate::operations::Session;
use crate::ownership::Identity;
use crate::process::{ToolCommand, ToolOutput, ToolRunner};
use crate::project::Project;

/// Tool runner fake that records rendered command lines
///
/// Results are served from a queue; when the queue is empty every run
/// succeeds with empty output.
pub struct RecordingRunner {
    calls: Rc<RefCell<Vec<String>>>,
    results: RefCell<VecDeque<ToolOutput>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            results: RefCell::new(VecDeque::new()),
        }
    }

    /// Handle to the recorded command lines, usable after the runner is boxed
    pub fn calls_handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }

    /// Queue a result for the next run
    pub fn push_result(&self, output: ToolOutput) {
        self.results.borrow_mut().push_back(output);
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, command: &ToolCommand) -> Result<ToolOutput> {
        self.calls.borrow_mut().push(command.rendered());

        Ok(self
            .results
            .borrow_mut()
            .pop_front()
            .unwrap_or(ToolOutput {
                code: Some(0),
                ..Default::default()
            }))
    }
}

/// Open a session over a temp project root with the given runner
pub fn session_in(root: &Path, runner: Box<dyn ToolRunner>) -> Session {
    Session {
        project: Project::open(root).expect("open project"),
        identity: Identity::resolve(None, None),
        verbose: false,
        runner,
    }
}
