//! Tool command assembly.
//!
//! Registry steps hold root-relative dataset paths and literal tokens;
//! assembling a step joins the paths onto the configured roots and picks
//! the script for the step's tool, producing the exact argv to launch.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{PathsConfig, ToolsConfig};
use crate::registry::{Step, Tool, ToolArg};

/// Resolved interpreter, script and dataset locations for one run.
#[derive(Debug, Clone)]
pub struct Toolchain {
    python: PathBuf,
    parser: PathBuf,
    stats: PathBuf,
    converter: PathBuf,
    partitions_root: PathBuf,
}

impl Toolchain {
    /// Resolve the toolchain from configured paths and tool scripts.
    ///
    /// Script locations are joined onto the tools root once, here; dataset
    /// paths are joined onto the partitions root per step at assembly time.
    pub fn new(paths: &PathsConfig, tools: &ToolsConfig) -> Self {
        Self {
            python: paths.python.clone(),
            parser: paths.tools_root.join(&tools.parser),
            stats: paths.tools_root.join(&tools.stats),
            converter: paths.tools_root.join(&tools.converter),
            partitions_root: paths.partitions_root.clone(),
        }
    }

    /// Interpreter used to run every tool.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Resolved script path for the given tool.
    pub fn script(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Parser => &self.parser,
            Tool::Stats => &self.stats,
            Tool::Converter => &self.converter,
        }
    }

    fn resolve(&self, arg: ToolArg) -> OsString {
        match arg {
            ToolArg::PartitionPath(path) => self.partitions_root.join(path).into_os_string(),
            ToolArg::Literal(token) => OsString::from(token),
        }
    }
}

/// One fully-resolved tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Tool this command invokes, kept for log and error context.
    pub tool: Tool,
    /// Interpreter to execute.
    pub program: PathBuf,
    /// Script, subcommand, positionals and flags, in argv order.
    pub args: Vec<OsString>,
}

impl CommandLine {
    /// Build a `std::process::Command` ready to spawn.
    ///
    /// Stdio is left inherited so tool output reaches the operator directly.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", Path::new(arg).display())?;
        }
        Ok(())
    }
}

/// Assemble the full command line for one pipeline step.
pub fn assemble(step: &Step, toolchain: &Toolchain) -> CommandLine {
    let mut args = Vec::with_capacity(2 + step.positional.len() + step.flags.len() * 2);

    args.push(toolchain.script(step.tool).into());
    if let Some(subcommand) = step.tool.subcommand() {
        args.push(subcommand.into());
    }
    for arg in &step.positional {
        args.push(toolchain.resolve(*arg));
    }
    for (name, value) in &step.flags {
        args.push((*name).into());
        args.push(toolchain.resolve(*value));
    }

    CommandLine {
        tool: step.tool,
        program: toolchain.python().to_path_buf(),
        args,
    }
}
