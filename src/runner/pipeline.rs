//! Sequential execution of a partition's pipeline.

use std::time::Instant;

use tracing::info;

use crate::error::{Error, Result};
use crate::interrupt;
use crate::registry::Partition;

use super::command::{Toolchain, assemble};
use super::launch::{Launch, StepOutcome};

/// Summary of one successfully converted partition.
#[derive(Debug, Clone)]
pub struct PartitionReport {
    /// Partition that was converted.
    pub name: &'static str,
    /// Number of tool invocations that ran.
    pub steps_run: usize,
    /// Wall-clock duration of the pipeline.
    pub duration_secs: f64,
}

/// Run every step of a partition's pipeline, in order.
///
/// Steps run strictly one after another. The first failing step aborts the
/// rest of the pipeline, since later steps read what earlier ones wrote.
/// An interrupt observed between steps stops before the next launch.
pub fn run_partition(
    partition: &Partition,
    toolchain: &Toolchain,
    launcher: &mut dyn Launch,
) -> Result<PartitionReport> {
    let start = Instant::now();
    let total = partition.steps.len();
    info!("Converting '{}' ({} step(s))", partition.name, total);

    for (index, step) in partition.steps.iter().enumerate() {
        if interrupt::interrupted() {
            return Err(Error::Interrupted);
        }

        let command = assemble(step, toolchain);
        info!("[{}/{}] {}: {}", index + 1, total, step.tool, command);

        match launcher.launch(&command)? {
            StepOutcome::Success => {}
            StepOutcome::ExitCode(code) => {
                return Err(Error::ToolFailure {
                    tool: step.tool,
                    partition: partition.name.to_string(),
                    code,
                });
            }
            StepOutcome::Signaled(signal) => {
                // A forwarded Ctrl+C shows up here as the child's signal
                // death; report it as the interrupt it is.
                if interrupt::interrupted() {
                    return Err(Error::Interrupted);
                }
                return Err(Error::ToolSignaled {
                    tool: step.tool,
                    partition: partition.name.to_string(),
                    signal,
                });
            }
        }
    }

    let duration_secs = start.elapsed().as_secs_f64();
    info!("Converted '{}' in {:.2}s", partition.name, duration_secs);

    Ok(PartitionReport {
        name: partition.name,
        steps_run: total,
        duration_secs,
    })
}
