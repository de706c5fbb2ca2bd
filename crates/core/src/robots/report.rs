//! Run outcome reporting types.
//!
//! A run either completes every robot in the roster or halts at the first
//! failure. The report records how many robots were attempted and, on
//! failure, which robot halted the run and why.

use std::fmt;

/// Why a robot halted the run.
#[derive(Debug, Clone)]
pub enum FailureKind {
    /// The interpreter could not be launched at all.
    Launch(String),
    /// The robot ran to completion but exited non-zero.
    NonZeroExit(i32),
    /// Any other fault while launching or waiting on the process.
    Unexpected(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch(msg) => write!(f, "launch failure: {msg}"),
            Self::NonZeroExit(code) => write!(f, "exited with code {code}"),
            Self::Unexpected(msg) => write!(f, "unexpected error: {msg}"),
        }
    }
}

/// Terminal result of a full run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Every robot in the roster succeeded.
    Success,
    /// The run halted at the first failing robot; later robots were never
    /// attempted.
    Failed {
        /// 0-based position of the failing robot in the roster.
        index: usize,
        /// Name of the failing robot.
        robot: String,
        /// Failure classification.
        kind: FailureKind,
    },
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of robots attempted, including the failing one if any.
    pub attempted: usize,
    /// Terminal result.
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Whether every robot succeeded.
    pub fn success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Success)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_launch() {
        let kind = FailureKind::Launch("node not on PATH".to_string());
        assert_eq!(kind.to_string(), "launch failure: node not on PATH");
    }

    #[test]
    fn display_nonzero_exit() {
        let kind = FailureKind::NonZeroExit(2);
        assert_eq!(kind.to_string(), "exited with code 2");
    }

    #[test]
    fn display_unexpected() {
        let kind = FailureKind::Unexpected("pipe burst".to_string());
        assert_eq!(kind.to_string(), "unexpected error: pipe burst");
    }

    #[test]
    fn report_success_flag() {
        let ok = RunReport {
            attempted: 5,
            outcome: RunOutcome::Success,
        };
        assert!(ok.success());

        let failed = RunReport {
            attempted: 3,
            outcome: RunOutcome::Failed {
                index: 2,
                robot: "build-movies.js".to_string(),
                kind: FailureKind::NonZeroExit(1),
            },
        };
        assert!(!failed.success());
    }
}
