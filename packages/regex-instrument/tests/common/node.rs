//! Node.js runner for execution-equivalence tests

use std::path::Path;
use std::process::{Command, Output};

/// Whether a `node` binary is on PATH
pub fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Run a script with Node
pub fn run_node(script: &Path) -> Output {
    Command::new("node")
        .arg(script)
        .output()
        .expect("failed to spawn node")
}

/// Stdout of a run as text
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
