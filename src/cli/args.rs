//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Batch conversion of chord-annotation partitions to JAMS.
#[derive(Debug, Parser)]
#[command(name = "chordbatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Partitions to convert, or "all" for every registered one.
    pub partitions: Vec<String>,

    /// Common options for dispatch runs.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered partitions.
    List,
    /// Print a partition's commands without running them.
    Show {
        /// Partition name.
        partition: String,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for dispatch runs.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Root directory holding the partition datasets.
    #[arg(short = 'p', long, global = true, env = "CHORDBATCH_PARTITIONS_ROOT")]
    pub partitions_root: Option<PathBuf>,

    /// Directory the tool scripts are resolved against.
    #[arg(long, global = true, env = "CHORDBATCH_TOOLS_ROOT")]
    pub tools_root: Option<PathBuf>,

    /// Python interpreter used to invoke the tools.
    #[arg(long, global = true, env = "CHORDBATCH_PYTHON")]
    pub python: Option<PathBuf>,

    /// Print each command instead of executing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Stop at the first partition whose pipeline fails.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["chordbatch", "isophonics"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.partitions, vec!["isophonics".to_string()]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_multiple_partitions_with_options() {
        let cli = Cli::try_parse_from(["chordbatch", "billboard", "chordify", "--dry-run", "-q"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.partitions.len(), 2);
        assert!(cli.run.dry_run);
        assert!(cli.run.quiet);
    }

    #[test]
    fn test_cli_parse_all_is_a_plain_positional() {
        let cli = Cli::try_parse_from(["chordbatch", "all"]).unwrap();
        assert_eq!(cli.partitions, vec!["all".to_string()]);
    }

    #[test]
    fn test_cli_parse_path_overrides() {
        let cli = Cli::try_parse_from([
            "chordbatch",
            "weimar",
            "-p",
            "/data/partitions",
            "--python",
            "/usr/bin/python3.11",
        ])
        .unwrap();
        assert_eq!(cli.run.partitions_root, Some(PathBuf::from("/data/partitions")));
        assert_eq!(cli.run.python, Some(PathBuf::from("/usr/bin/python3.11")));
    }

    #[test]
    fn test_cli_parse_verbosity_count() {
        let cli = Cli::try_parse_from(["chordbatch", "-vv", "isophonics"]).unwrap();
        assert_eq!(cli.run.verbose, 2);
    }

    #[test]
    fn test_cli_parse_list_subcommand() {
        let cli = Cli::try_parse_from(["chordbatch", "list"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Some(Command::List)));
    }

    #[test]
    fn test_cli_parse_show_subcommand() {
        let cli = Cli::try_parse_from(["chordbatch", "show", "isophonics"]).unwrap();
        match cli.command {
            Some(Command::Show { partition }) => assert_eq!(partition, "isophonics"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["chordbatch", "config", "show"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_global_overrides_reach_subcommands() {
        let cli =
            Cli::try_parse_from(["chordbatch", "show", "weimar", "--tools-root", "/opt/choco"])
                .unwrap();
        assert_eq!(cli.run.tools_root, Some(PathBuf::from("/opt/choco")));
    }
}
