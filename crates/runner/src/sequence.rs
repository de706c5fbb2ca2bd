//! Sequential fail-fast robot execution.
//!
//! Runs an ordered roster of robots one at a time, emitting console
//! status between steps. The first failure aborts the run; remaining
//! robots are never attempted. No retries, no parallelism, no backoff.

use mediabot_core::robots::executor::{RobotError, RobotExecutor};
use mediabot_core::robots::report::{FailureKind, RunOutcome, RunReport};

use crate::console;

/// Run every robot in `roster` in order, halting at the first failure.
///
/// Robot names are expected to be non-empty script identifiers; they are
/// passed to the executor untouched, in listed order, without
/// deduplication. Exactly one child process is in flight at a time: each
/// robot is awaited to termination before the next is launched.
pub async fn run_robots<E: RobotExecutor>(executor: &E, roster: &[&str]) -> RunReport {
    for (index, &robot) in roster.iter().enumerate() {
        console::starting(robot);

        let kind = match executor.execute(robot).await {
            Ok(output) => {
                // Both streams are fully captured before anything is
                // printed, so the console order is deterministic: stdout
                // block, then the marker, then the stderr block.
                console::robot_stdout(&output.stdout);

                if output.success() {
                    console::success(robot);
                    tracing::info!(
                        robot = %robot,
                        exit_code = output.exit_code,
                        duration_ms = output.duration_ms,
                        "Robot finished",
                    );
                    continue;
                }

                console::failure(robot);
                console::error_details(&output.stderr);
                tracing::error!(
                    robot = %robot,
                    exit_code = output.exit_code,
                    duration_ms = output.duration_ms,
                    "Robot failed",
                );
                FailureKind::NonZeroExit(output.exit_code)
            }
            Err(err @ RobotError::InterpreterNotFound(_)) => {
                console::invocation_error(&format!(
                    "Error: {err}. Is Node.js installed correctly?"
                ));
                tracing::error!(robot = %robot, error = %err, "Robot launch failed");
                FailureKind::Launch(err.to_string())
            }
            Err(err) => {
                console::invocation_error(&format!(
                    "An unexpected error occurred while running {robot}: {err}"
                ));
                tracing::error!(robot = %robot, error = %err, "Robot invocation error");
                FailureKind::Unexpected(err.to_string())
            }
        };

        return RunReport {
            attempted: index + 1,
            outcome: RunOutcome::Failed {
                index,
                robot: robot.to_string(),
                kind,
            },
        };
    }

    RunReport {
        attempted: roster.len(),
        outcome: RunOutcome::Success,
    }
}
