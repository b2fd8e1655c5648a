//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "chordbatch";

/// Pseudo-partition name that expands to every registered partition.
pub const ALL_PARTITIONS: &str = "all";

/// Default root directory holding the partition datasets.
pub const DEFAULT_PARTITIONS_ROOT: &str = "partitions";

/// Default directory containing the conversion tool scripts.
pub const DEFAULT_TOOLS_ROOT: &str = ".";

/// Default Python interpreter used to invoke the tools.
pub const DEFAULT_PYTHON: &str = "python3";

/// Tool script locations relative to the tools root.
pub mod tool_scripts {
    /// Annotation parser entry point.
    pub const PARSER: &str = "parsers/instances.py";
    /// Dataset statistics entry point.
    pub const STATS: &str = "stats.py";
    /// JAMS converter entry point.
    pub const CONVERTER: &str = "converters/converter_instances.py";
}

/// Subcommand token the stats tool expects as its first argument.
pub const STATS_SUBCOMMAND: &str = "stats";

/// Optional flags understood by the parser tool.
pub mod parser_flags {
    /// Dataset name override passed to the parser.
    pub const DATASET_NAME: &str = "--dataset_name";
    /// Score-level metadata file.
    pub const SCORE_META: &str = "--score_meta";
    /// Track-level metadata file.
    pub const TRACK_META: &str = "--track_meta";
    /// Release-level metadata file.
    pub const RELEASE_META: &str = "--release_meta";
    /// Directory of per-track chord annotations.
    pub const CHORD_DIR: &str = "--chord_dir";
    /// Directory of per-track local key annotations.
    pub const LKEY_DIR: &str = "--lkey_dir";
    /// File of global key annotations.
    pub const GKEY_FILE: &str = "--gkey_file";
}

/// Process exit codes, shell-style.
pub mod exit_codes {
    /// Every requested partition converted cleanly.
    pub const SUCCESS: i32 = 0;
    /// At least one tool invocation failed.
    pub const TOOL_FAILURE: i32 = 1;
    /// At least one requested name matched no partition.
    pub const USAGE: i32 = 2;
    /// The run was interrupted by a signal.
    pub const INTERRUPTED: i32 = 130;
}
