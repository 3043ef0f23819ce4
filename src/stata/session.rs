//! Session interface
//!
//! The bridge never owns the Stata process. It consumes a synchronous
//! submission capability from whichever session implementation the host
//! wires in (one drives the Windows automation API, one a pseudo-terminal
//! child) and stays agnostic about everything behind it: process lifecycle,
//! timeouts, and interrupts all live on the other side of this trait.

use crate::stata::segmenting::Statement;
use serde::Deserialize;
use std::path::Path;

/// How the session implementation drives the Stata process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Windows automation API.
    Automation,
    /// Pseudo-terminal-attached console process.
    Console,
}

impl ExecutionMode {
    /// Mode used when the configuration does not pick one.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            ExecutionMode::Automation
        } else {
            ExecutionMode::Console
        }
    }
}

/// Synchronous statement-submission capability of a live Stata session.
///
/// One call submits one statement as its ordered `(marker, text)` pairs and
/// blocks until that statement's exit code and combined output return.
/// Failure is conveyed through the exit code; the bridge propagates
/// whatever it receives.
pub trait Session {
    fn submit(&mut self, pairs: &[(&'static str, &str)]) -> (i32, String);
}

/// Statements issued when a session boots: change into the notebook's
/// working directory (compound-quoted, so the path may contain quotes) and
/// disable output pagination.
pub fn startup_statements(working_dir: &Path) -> Vec<Statement> {
    vec![
        Statement::plain(format!("cd `\"{}\"'", working_dir.display())),
        Statement::plain("set more off"),
    ]
}
