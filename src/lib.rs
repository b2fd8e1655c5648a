//! Chordbatch - batch dispatcher for chord-annotation dataset conversion.
//!
//! This crate maps named corpus partitions to fixed pipelines of external
//! tool invocations (parse to JAMS, compute stats, convert) and runs the
//! requested pipelines sequentially, one tool at a time.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod interrupt;
pub mod registry;
pub mod runner;

use clap::Parser;
use cli::{Cli, Command, RunArgs};
use config::{Config, PathsConfig, config_file_path, load_default_config, save_default_config};
use constants::{ALL_PARTITIONS, exit_codes};
use registry::{Partition, Registry};
use runner::{DryRunLauncher, Launch, ProcessLauncher, Toolchain, assemble, run_partition};
use std::time::Instant;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the chordbatch CLI.
///
/// Returns the process exit code: the worst severity observed across all
/// requested partitions.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.run.verbose, cli.run.quiet);

    // Forward Ctrl+C to the running tool and stop between launches
    interrupt::install_handler();

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config, &cli.run);
    }

    // Show help if no partitions were requested
    if cli.partitions.is_empty() {
        let config_exists = config_file_path().is_ok_and(|path| path.exists());
        cli::help::print_smart_help(config_exists);
        return Ok(exit_codes::SUCCESS);
    }

    // Run conversions
    let registry = Registry::builtin();
    let toolchain = Toolchain::new(&effective_paths(&config, &cli.run), &config.tools);

    let report = if cli.run.dry_run {
        dispatch(
            &cli.partitions,
            &registry,
            &toolchain,
            &mut DryRunLauncher,
            cli.run.fail_fast,
        )
    } else {
        dispatch(
            &cli.partitions,
            &registry,
            &toolchain,
            &mut ProcessLauncher,
            cli.run.fail_fast,
        )
    };

    Ok(report.severity.exit_code())
}

/// Apply command-line path overrides on top of the configured paths.
fn effective_paths(config: &Config, args: &RunArgs) -> PathsConfig {
    PathsConfig {
        partitions_root: args
            .partitions_root
            .clone()
            .unwrap_or_else(|| config.paths.partitions_root.clone()),
        tools_root: args
            .tools_root
            .clone()
            .unwrap_or_else(|| config.paths.tools_root.clone()),
        python: args
            .python
            .clone()
            .unwrap_or_else(|| config.paths.python.clone()),
    }
}

/// Worst outcome seen across a dispatch run, in increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
enum RunSeverity {
    /// Every requested partition converted.
    #[default]
    Clean,
    /// At least one requested name matched no partition.
    UnknownPartition,
    /// At least one pipeline failed.
    ToolFailure,
    /// The run was interrupted.
    Interrupted,
}

impl RunSeverity {
    fn worsen(&mut self, other: Self) {
        if other > *self {
            *self = other;
        }
    }

    fn exit_code(self) -> i32 {
        match self {
            Self::Clean => exit_codes::SUCCESS,
            Self::UnknownPartition => exit_codes::USAGE,
            Self::ToolFailure => exit_codes::TOOL_FAILURE,
            Self::Interrupted => exit_codes::INTERRUPTED,
        }
    }
}

/// Tally of one dispatch run.
#[derive(Debug, Default)]
struct DispatchReport {
    converted: usize,
    failed: usize,
    unknown: usize,
    severity: RunSeverity,
}

/// Resolve every requested name and run the matching pipelines in order.
///
/// Unknown names are reported and skipped; a failed pipeline does not stop
/// later requests unless `fail_fast` is set. An interrupt stops everything.
fn dispatch(
    requests: &[String],
    registry: &Registry,
    toolchain: &Toolchain,
    launcher: &mut dyn Launch,
    fail_fast: bool,
) -> DispatchReport {
    let start = Instant::now();
    let mut report = DispatchReport::default();

    'requests: for request in requests {
        if let Some(partition) = registry.lookup(request) {
            if convert_one(partition, toolchain, launcher, fail_fast, &mut report) {
                break 'requests;
            }
        } else if request == ALL_PARTITIONS {
            for partition in registry.iter() {
                if convert_one(partition, toolchain, launcher, fail_fast, &mut report) {
                    break 'requests;
                }
            }
        } else {
            report_unknown(request, registry);
            report.unknown += 1;
            report.severity.worsen(RunSeverity::UnknownPartition);
        }
    }

    // Summary
    info!(
        "Complete: {} converted, {} failed, {} unknown in {:.2}s",
        report.converted,
        report.failed,
        report.unknown,
        start.elapsed().as_secs_f64()
    );
    if report.failed > 0 && !fail_fast {
        warn!("{} partition(s) had failures", report.failed);
    }

    report
}

/// Run one partition and update the tally.
///
/// Returns true when the whole dispatch should stop.
fn convert_one(
    partition: &Partition,
    toolchain: &Toolchain,
    launcher: &mut dyn Launch,
    fail_fast: bool,
    report: &mut DispatchReport,
) -> bool {
    match run_partition(partition, toolchain, launcher) {
        Ok(_) => {
            report.converted += 1;
            false
        }
        Err(Error::Interrupted) => {
            warn!("Interrupted, stopping");
            report.severity.worsen(RunSeverity::Interrupted);
            true
        }
        Err(e) => {
            error!("Partition '{}' failed: {e}", partition.name);
            report.failed += 1;
            report.severity.worsen(RunSeverity::ToolFailure);
            fail_fast
        }
    }
}

/// Report an unknown partition name together with every valid name.
#[allow(clippy::print_stderr)]
fn report_unknown(name: &str, registry: &Registry) {
    let unknown = Error::UnknownPartition {
        name: name.to_string(),
    };
    eprintln!("error: {unknown}");
    eprintln!("valid partitions are:");
    for valid in registry.names() {
        eprintln!("  {valid}");
    }
    eprintln!("  {ALL_PARTITIONS} (runs every partition above)");
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Tool output passes through untouched; this only scopes dispatcher logs.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config: &Config, args: &RunArgs) -> Result<i32> {
    match command {
        Command::List => {
            registry::list_partitions(&Registry::builtin());
            Ok(exit_codes::SUCCESS)
        }
        Command::Show { partition } => {
            let registry = Registry::builtin();
            let Some(partition) = registry.lookup(&partition) else {
                report_unknown(&partition, &registry);
                return Ok(exit_codes::USAGE);
            };
            let toolchain = Toolchain::new(&effective_paths(config, args), &config.tools);
            for step in &partition.steps {
                println!("{}", assemble(step, &toolchain));
            }
            Ok(exit_codes::SUCCESS)
        }
        Command::Config { action } => {
            handle_config_command(action)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nSet partitions_root to your corpus checkout and tools_root to");
                println!("the directory holding the conversion scripts.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::runner::{RecordingLauncher, StepOutcome};
    use serial_test::serial;

    fn test_toolchain() -> Toolchain {
        Toolchain::new(&PathsConfig::default(), &ToolsConfig::default())
    }

    fn requests(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    #[serial]
    fn all_expands_to_every_partition_in_order() {
        interrupt::reset();
        let registry = Registry::builtin();
        let toolchain = test_toolchain();
        let mut launcher = RecordingLauncher::new();

        let report = dispatch(&requests(&["all"]), &registry, &toolchain, &mut launcher, false);

        assert_eq!(report.converted, registry.len());
        assert_eq!(report.severity, RunSeverity::Clean);
        let total_steps: usize = registry.iter().map(|p| p.steps.len()).sum();
        assert_eq!(launcher.launched.len(), total_steps);

        // First appearance of each partition follows registry order.
        let mut last_index = 0;
        for name in registry.names() {
            let index = launcher
                .launched
                .iter()
                .position(|cmd| cmd.contains(name))
                .unwrap();
            assert!(index >= last_index, "{name} ran out of order");
            last_index = index;
        }
    }

    #[test]
    #[serial]
    fn unknown_name_launches_nothing() {
        interrupt::reset();
        let registry = Registry::builtin();
        let mut launcher = RecordingLauncher::new();

        let report = dispatch(
            &requests(&["does-not-exist"]),
            &registry,
            &test_toolchain(),
            &mut launcher,
            false,
        );

        assert!(launcher.launched.is_empty());
        assert_eq!(report.unknown, 1);
        assert_eq!(report.severity.exit_code(), exit_codes::USAGE);
    }

    #[test]
    #[serial]
    fn unknown_between_valid_requests_does_not_stop_dispatch() {
        interrupt::reset();
        let registry = Registry::builtin();
        let mut launcher = RecordingLauncher::new();

        let report = dispatch(
            &requests(&["billboard", "nope", "chordify"]),
            &registry,
            &test_toolchain(),
            &mut launcher,
            false,
        );

        assert_eq!(report.converted, 2);
        assert_eq!(report.unknown, 1);
        assert_eq!(launcher.launched.len(), 4);
        assert!(launcher.launched[0].contains("billboard/raw"));
        assert!(launcher.launched[2].contains("chordify/raw"));
        assert_eq!(report.severity.exit_code(), exit_codes::USAGE);
    }

    #[test]
    #[serial]
    fn pipeline_failure_is_soft_by_default() {
        interrupt::reset();
        let registry = Registry::builtin();
        // The first launch (isophonics parse) fails; billboard still runs.
        let mut launcher = RecordingLauncher::with_outcomes([StepOutcome::ExitCode(2)]);

        let report = dispatch(
            &requests(&["isophonics", "billboard"]),
            &registry,
            &test_toolchain(),
            &mut launcher,
            false,
        );

        assert_eq!(report.failed, 1);
        assert_eq!(report.converted, 1);
        assert_eq!(
            launcher.launched.len(),
            3,
            "isophonics stops at its parse, billboard runs both steps"
        );
        assert_eq!(report.severity.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    #[serial]
    fn fail_fast_stops_after_the_first_failed_partition() {
        interrupt::reset();
        let registry = Registry::builtin();
        let mut launcher = RecordingLauncher::with_outcomes([StepOutcome::ExitCode(2)]);

        let report = dispatch(
            &requests(&["isophonics", "billboard"]),
            &registry,
            &test_toolchain(),
            &mut launcher,
            true,
        );

        assert_eq!(launcher.launched.len(), 1);
        assert_eq!(report.converted, 0);
        assert_eq!(report.failed, 1);
    }

    #[test]
    #[serial]
    fn failure_outranks_unknown_in_the_exit_code() {
        interrupt::reset();
        let registry = Registry::builtin();
        let mut launcher = RecordingLauncher::with_outcomes([StepOutcome::ExitCode(5)]);

        let report = dispatch(
            &requests(&["nope", "isophonics"]),
            &registry,
            &test_toolchain(),
            &mut launcher,
            false,
        );

        assert_eq!(report.unknown, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.severity.exit_code(), exit_codes::TOOL_FAILURE);
    }

    #[test]
    fn unknown_name_diagnostic_uses_the_error_display() {
        let err = Error::UnknownPartition {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "unknown partition 'nope'");
    }

    #[test]
    fn severity_only_worsens() {
        let mut severity = RunSeverity::Clean;
        severity.worsen(RunSeverity::UnknownPartition);
        assert_eq!(severity.exit_code(), exit_codes::USAGE);
        severity.worsen(RunSeverity::ToolFailure);
        assert_eq!(severity.exit_code(), exit_codes::TOOL_FAILURE);
        severity.worsen(RunSeverity::UnknownPartition);
        assert_eq!(severity.exit_code(), exit_codes::TOOL_FAILURE);
        severity.worsen(RunSeverity::Interrupted);
        assert_eq!(severity.exit_code(), exit_codes::INTERRUPTED);
    }

    #[test]
    fn effective_paths_prefers_cli_overrides() {
        let config = Config::default();
        let args = RunArgs {
            partitions_root: Some(std::path::PathBuf::from("/data/partitions")),
            tools_root: None,
            python: None,
            dry_run: false,
            fail_fast: false,
            quiet: false,
            verbose: 0,
        };

        let paths = effective_paths(&config, &args);
        assert_eq!(paths.partitions_root, std::path::PathBuf::from("/data/partitions"));
        assert_eq!(paths.python, config.paths.python);
    }
}
