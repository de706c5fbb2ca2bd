//! Colored console status reporting.
//!
//! The runner's terminal contract: human-readable status lines with a
//! fixed set of semantic markers (starting, success, failure, halted),
//! colored for terminal consumption rather than machine parsing.

use colored::Colorize;

/// Opening banner for a full run.
pub fn banner() {
    println!("{}", "Starting the build orchestration process...".green());
}

/// Announce that a robot is about to start.
pub fn starting(robot: &str) {
    println!("{}", format!("--- Starting robot: {robot} ---").yellow());
}

/// Emit a robot's captured stdout verbatim.
///
/// Printed before the success/failure marker so a robot's diagnostic
/// output always precedes its verdict.
pub fn robot_stdout(stdout: &str) {
    if !stdout.is_empty() {
        println!("{stdout}");
    }
}

/// Success marker for a finished robot.
pub fn success(robot: &str) {
    println!(
        "{}\n",
        format!("--- SUCCESS: {robot} finished successfully. ---").green()
    );
}

/// Failure marker for a robot that exited non-zero.
pub fn failure(robot: &str) {
    println!("{}", format!("--- FAILURE: {robot} failed! ---").red());
}

/// Captured stderr of a failed robot, printed after the failure marker.
pub fn error_details(stderr: &str) {
    if !stderr.is_empty() {
        println!("{}\n", format!("Error Details:\n{stderr}").red());
    }
}

/// A robot could not be launched, or died to an unexpected fault.
pub fn invocation_error(message: &str) {
    println!("{}\n", message.red());
}

/// The run halted because `robot` failed.
pub fn halted(robot: &str) {
    println!(
        "{}",
        format!("Build process halted due to a failure in {robot}.").red()
    );
}

/// Closing line for an all-success run.
pub fn all_succeeded() {
    println!(
        "{}",
        "✅ All robots ran successfully! Your website is ready.".green()
    );
}
