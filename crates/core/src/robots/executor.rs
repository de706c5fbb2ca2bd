//! Robot execution interface and shared types.
//!
//! Defines [`RobotExecutor`], the trait the Node.js executor implements,
//! along with [`RobotOutput`] and [`RobotError`].

use std::io;

/// Captured output from a robot that ran to completion.
#[derive(Debug, Clone)]
pub struct RobotOutput {
    /// Complete stdout captured from the process.
    pub stdout: String,
    /// Complete stderr captured from the process.
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl RobotOutput {
    /// Whether the robot reported success (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Errors that can occur while launching or waiting on a robot process.
///
/// A robot that runs to completion with a non-zero exit code is not an
/// error at this layer: the exit code travels in [`RobotOutput`] and the
/// sequencing layer decides how to react.
#[derive(Debug, thiserror::Error)]
pub enum RobotError {
    /// The interpreter could not be resolved on the execution path.
    #[error("interpreter not found: {0}")]
    InterpreterNotFound(io::Error),

    /// Any other I/O fault while spawning or waiting on the process.
    #[error("i/o error while running robot: {0}")]
    Io(io::Error),
}

impl RobotError {
    /// Classify a spawn/wait failure.
    ///
    /// `NotFound` means the interpreter itself is unresolvable; everything
    /// else is an ordinary I/O fault.
    pub fn from_io(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::InterpreterNotFound(err)
        } else {
            Self::Io(err)
        }
    }
}

/// Trait implemented by robot executors.
///
/// An executor receives a script name, spawns the appropriate subprocess,
/// and returns the captured output or an error.
pub trait RobotExecutor: Send + Sync {
    /// Execute the robot script named `script`.
    fn execute(
        &self,
        script: &str,
    ) -> impl std::future::Future<Output = Result<RobotOutput, RobotError>> + Send;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_interpreter_not_found() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = RobotError::InterpreterNotFound(inner);
        assert!(err.to_string().starts_with("interpreter not found:"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn display_io() {
        let inner = io::Error::other("pipe burst");
        let err = RobotError::Io(inner);
        assert!(err.to_string().starts_with("i/o error"));
        assert!(err.to_string().contains("pipe burst"));
    }

    #[test]
    fn from_io_classifies_not_found() {
        let err = RobotError::from_io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, RobotError::InterpreterNotFound(_)));
    }

    #[test]
    fn from_io_classifies_other_kinds() {
        let err = RobotError::from_io(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        assert!(matches!(err, RobotError::Io(_)));
    }

    #[test]
    fn output_success_only_for_exit_zero() {
        let mut output = RobotOutput {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
            duration_ms: 12,
        };
        assert!(output.success());
        output.exit_code = 2;
        assert!(!output.success());
        output.exit_code = -1;
        assert!(!output.success());
    }
}
