//! Configuration type definitions.

use crate::constants::{DEFAULT_PARTITIONS_ROOT, DEFAULT_PYTHON, DEFAULT_TOOLS_ROOT, tool_scripts};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filesystem roots and interpreter.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Tool script locations.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Filesystem roots and interpreter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root directory holding the partition datasets.
    pub partitions_root: PathBuf,

    /// Directory the tool scripts are resolved against.
    pub tools_root: PathBuf,

    /// Python interpreter used to invoke the tools.
    pub python: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            partitions_root: PathBuf::from(DEFAULT_PARTITIONS_ROOT),
            tools_root: PathBuf::from(DEFAULT_TOOLS_ROOT),
            python: PathBuf::from(DEFAULT_PYTHON),
        }
    }
}

/// Tool script locations relative to the tools root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Annotation parser entry point.
    pub parser: PathBuf,

    /// Corpus statistics entry point.
    pub stats: PathBuf,

    /// JAMS converter entry point.
    pub converter: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            parser: PathBuf::from(tool_scripts::PARSER),
            stats: PathBuf::from(tool_scripts::STATS),
            converter: PathBuf::from(tool_scripts::CONVERTER),
        }
    }
}
