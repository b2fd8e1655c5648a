//! Partition conversion runner.

mod command;
mod launch;
mod pipeline;

pub use command::{CommandLine, Toolchain, assemble};
pub use launch::{DryRunLauncher, Launch, ProcessLauncher, StepOutcome};
pub use pipeline::{PartitionReport, run_partition};

#[cfg(test)]
pub(crate) use launch::RecordingLauncher;
