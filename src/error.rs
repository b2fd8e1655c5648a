//! Error types for chordbatch.

use crate::registry::Tool;

/// Result type alias for chordbatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for chordbatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Requested name matched no registered partition.
    #[error("unknown partition '{name}'")]
    UnknownPartition {
        /// The name that failed to resolve.
        name: String,
    },

    /// A tool process could not be started.
    #[error("failed to launch {tool} ('{program}')")]
    ToolLaunch {
        /// Tool that failed to start.
        tool: Tool,
        /// Interpreter the launch attempted to execute.
        program: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A tool process exited with a non-zero status.
    #[error("{tool} failed for partition '{partition}' (exit code {code})")]
    ToolFailure {
        /// Tool that failed.
        tool: Tool,
        /// Partition whose pipeline was running.
        partition: String,
        /// Exit code reported by the tool.
        code: i32,
    },

    /// A tool process was killed by a signal.
    #[error("{tool} was killed by signal {signal} while converting partition '{partition}'")]
    ToolSignaled {
        /// Tool that was killed.
        tool: Tool,
        /// Partition whose pipeline was running.
        partition: String,
        /// Signal number that killed the tool.
        signal: i32,
    },

    /// The run was interrupted by the user.
    #[error("interrupted")]
    Interrupted,
}
