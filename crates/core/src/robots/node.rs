//! Node.js robot executor.
//!
//! Spawns the Node.js interpreter with the script name as its sole
//! argument, capturing stdout and stderr in full (not streamed). The
//! child is awaited to termination and no timeout is applied, so a hung
//! robot blocks the run until the host terminates it.

use std::time::Instant;

use tokio::process::Command;

use super::executor::{RobotError, RobotExecutor, RobotOutput};

/// Interpreter binary resolved on `PATH` for production runs.
const DEFAULT_INTERPRETER: &str = "node";

/// Executor for Node.js robot scripts.
pub struct NodeExecutor {
    interpreter: String,
}

impl NodeExecutor {
    /// Create an executor that runs robots under `node` from `PATH`.
    pub fn new() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
        }
    }

    /// Create an executor with a custom interpreter binary.
    ///
    /// Tests substitute `sh` (or a nonexistent binary) for the real
    /// Node.js runtime.
    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for NodeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotExecutor for NodeExecutor {
    async fn execute(&self, script: &str) -> Result<RobotOutput, RobotError> {
        let start = Instant::now();

        let output = Command::new(&self.interpreter)
            .arg(script)
            .output()
            .await
            .map_err(RobotError::from_io)?;

        Ok(RobotOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
