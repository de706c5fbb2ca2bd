//! `mediabot-core` library crate.
//!
//! Robot subprocess execution domain logic for the build runner. All
//! subprocess management is pure (no console I/O) and lives here for
//! isolation and testability; console reporting and sequencing belong to
//! the runner crate.

pub mod robots;
