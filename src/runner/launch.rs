//! Launch seam between pipeline sequencing and real subprocesses.

#![allow(clippy::print_stdout)]

use std::process::ExitStatus;

use tracing::debug;

use crate::error::{Error, Result};
use crate::interrupt;

use super::command::CommandLine;

/// Outcome of one tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The tool exited with status zero.
    Success,
    /// The tool exited with a non-zero status.
    ExitCode(i32),
    /// The tool was killed by a signal (Unix only).
    Signaled(i32),
}

/// Something that can execute an assembled command line.
///
/// Pipeline sequencing is written against this trait so it can be tested
/// without spawning processes, and so dry runs share the exact code path
/// that real runs take.
pub trait Launch {
    /// Execute the command and report how it ended.
    fn launch(&mut self, command: &CommandLine) -> Result<StepOutcome>;
}

/// Launcher that spawns the real tool process and waits for it.
///
/// Stdio is inherited from the dispatcher, and the child pid is tracked
/// while it runs so an interrupt can be forwarded to it.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launch for ProcessLauncher {
    fn launch(&mut self, command: &CommandLine) -> Result<StepOutcome> {
        let mut child = command
            .to_command()
            .spawn()
            .map_err(|source| Error::ToolLaunch {
                tool: command.tool,
                program: command.program.clone(),
                source,
            })?;

        interrupt::track_child(child.id());
        let status = child.wait();
        interrupt::clear_child();

        let status = status?;
        debug!("{} exited with {status}", command.tool);
        Ok(outcome_from_status(status))
    }
}

/// Launcher that prints each command instead of executing it.
#[derive(Debug, Default)]
pub struct DryRunLauncher;

impl Launch for DryRunLauncher {
    fn launch(&mut self, command: &CommandLine) -> Result<StepOutcome> {
        println!("{command}");
        Ok(StepOutcome::Success)
    }
}

fn outcome_from_status(status: ExitStatus) -> StepOutcome {
    if status.success() {
        return StepOutcome::Success;
    }
    match status.code() {
        Some(code) => StepOutcome::ExitCode(code),
        None => signal_outcome(status),
    }
}

#[cfg(unix)]
fn signal_outcome(status: ExitStatus) -> StepOutcome {
    use std::os::unix::process::ExitStatusExt;
    StepOutcome::Signaled(status.signal().unwrap_or(-1))
}

#[cfg(not(unix))]
fn signal_outcome(_status: ExitStatus) -> StepOutcome {
    StepOutcome::ExitCode(-1)
}

/// Test launcher that records every command and replays scripted outcomes.
///
/// Outcomes are consumed front to back; once the script runs out, every
/// further launch succeeds.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLauncher {
    pub launched: Vec<String>,
    pub outcomes: std::collections::VecDeque<StepOutcome>,
}

#[cfg(test)]
impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: impl IntoIterator<Item = StepOutcome>) -> Self {
        Self {
            launched: Vec::new(),
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl Launch for RecordingLauncher {
    fn launch(&mut self, command: &CommandLine) -> Result<StepOutcome> {
        self.launched.push(command.to_string());
        Ok(self.outcomes.pop_front().unwrap_or(StepOutcome::Success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn wait_statuses_map_to_outcomes() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) packs the exit code into the high byte and the killing
        // signal into the low bits.
        assert_eq!(outcome_from_status(ExitStatus::from_raw(0)), StepOutcome::Success);
        assert_eq!(
            outcome_from_status(ExitStatus::from_raw(1 << 8)),
            StepOutcome::ExitCode(1)
        );
        assert_eq!(
            outcome_from_status(ExitStatus::from_raw(3 << 8)),
            StepOutcome::ExitCode(3)
        );
        assert_eq!(outcome_from_status(ExitStatus::from_raw(2)), StepOutcome::Signaled(2));
        assert_eq!(outcome_from_status(ExitStatus::from_raw(9)), StepOutcome::Signaled(9));
    }

    #[test]
    fn dry_run_always_succeeds() {
        use crate::config::{PathsConfig, ToolsConfig};
        use crate::registry::Step;
        use crate::runner::command::{Toolchain, assemble};

        let toolchain = Toolchain::new(&PathsConfig::default(), &ToolsConfig::default());
        let command = assemble(&Step::stats("x/choco/jams", "x/choco"), &toolchain);

        let mut launcher = DryRunLauncher;
        assert_eq!(launcher.launch(&command).ok(), Some(StepOutcome::Success));
    }
}
