//! Robot execution domain logic.
//!
//! A "robot" is an external Node.js build script invoked as a child
//! process step. This module provides the executor trait, the Node.js
//! implementation, and the run-report types consumed by the sequencing
//! layer.

pub mod executor;
pub mod node;
pub mod report;
