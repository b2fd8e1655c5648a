//! Data structures for partitions and their conversion pipelines.

use std::fmt;

use crate::constants::STATS_SUBCOMMAND;

/// External tool a pipeline step invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Annotation parser (`parsers/instances.py`).
    Parser,
    /// Corpus statistics generator (`stats.py`).
    Stats,
    /// JAMS converter (`converters/converter_instances.py`).
    Converter,
}

impl Tool {
    /// Subcommand token the tool expects before its arguments, if any.
    ///
    /// The stats script multiplexes several entry points behind a leading
    /// subcommand; the parser and converter take their arguments directly.
    pub fn subcommand(self) -> Option<&'static str> {
        match self {
            Self::Stats => Some(STATS_SUBCOMMAND),
            Self::Parser | Self::Converter => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parser => "parser",
            Self::Stats => "stats",
            Self::Converter => "converter",
        };
        write!(f, "{name}")
    }
}

/// Annotation modality of a partition's source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Annotations aligned to audio recordings.
    Audio,
    /// Annotations aligned to symbolic scores.
    Score,
}

impl Modality {
    /// Modality tag passed to the parser tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One argument of a tool invocation.
///
/// Dataset paths stay relative in the registry and are resolved against the
/// configured partitions root when a command is assembled; literal tokens are
/// passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolArg {
    /// Path relative to the partitions root.
    PartitionPath(&'static str),
    /// Literal token passed through verbatim.
    Literal(&'static str),
}

/// Single tool invocation within a partition's pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Tool to invoke.
    pub tool: Tool,
    /// Positional arguments in the order the tool expects them.
    pub positional: Vec<ToolArg>,
    /// Optional flags appended after the positional arguments.
    pub flags: Vec<(&'static str, ToolArg)>,
}

impl Step {
    /// Parser invocation: raw input dir, JAMS output dir, annotation format
    /// tag and modality tag.
    pub fn parse(
        input: &'static str,
        output: &'static str,
        format: &'static str,
        modality: Modality,
    ) -> Self {
        Self {
            tool: Tool::Parser,
            positional: vec![
                ToolArg::PartitionPath(input),
                ToolArg::PartitionPath(output),
                ToolArg::Literal(format),
                ToolArg::Literal(modality.as_str()),
            ],
            flags: Vec::new(),
        }
    }

    /// Stats invocation: JAMS dir and stats output dir.
    pub fn stats(jams: &'static str, output: &'static str) -> Self {
        Self {
            tool: Tool::Stats,
            positional: vec![ToolArg::PartitionPath(jams), ToolArg::PartitionPath(output)],
            flags: Vec::new(),
        }
    }

    /// Converter invocation: JAMS dir, converted output dir, dataset label
    /// and the two option tokens the converter defines.
    pub fn convert(
        jams: &'static str,
        output: &'static str,
        label: &'static str,
        options: [&'static str; 2],
    ) -> Self {
        Self {
            tool: Tool::Converter,
            positional: vec![
                ToolArg::PartitionPath(jams),
                ToolArg::PartitionPath(output),
                ToolArg::Literal(label),
                ToolArg::Literal(options[0]),
                ToolArg::Literal(options[1]),
            ],
            flags: Vec::new(),
        }
    }

    /// Append an optional flag and its value.
    #[must_use]
    pub fn flag(mut self, name: &'static str, value: ToolArg) -> Self {
        self.flags.push((name, value));
        self
    }
}

/// Named partition and its fixed conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Registry name, unique and case-sensitive.
    pub name: &'static str,
    /// Tool invocations in execution order.
    pub steps: Vec<Step>,
}

impl Partition {
    /// Create a partition with the given pipeline.
    pub fn new(name: &'static str, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::parser_flags;

    #[test]
    fn stats_tool_carries_subcommand() {
        assert_eq!(Tool::Stats.subcommand(), Some("stats"));
        assert_eq!(Tool::Parser.subcommand(), None);
        assert_eq!(Tool::Converter.subcommand(), None);
    }

    #[test]
    fn tool_display_names() {
        assert_eq!(Tool::Parser.to_string(), "parser");
        assert_eq!(Tool::Stats.to_string(), "stats");
        assert_eq!(Tool::Converter.to_string(), "converter");
    }

    #[test]
    fn parse_step_orders_positionals() {
        let step = Step::parse("x/raw", "x/choco", "lab", Modality::Audio);
        assert_eq!(step.tool, Tool::Parser);
        assert_eq!(
            step.positional,
            vec![
                ToolArg::PartitionPath("x/raw"),
                ToolArg::PartitionPath("x/choco"),
                ToolArg::Literal("lab"),
                ToolArg::Literal("audio"),
            ]
        );
        assert!(step.flags.is_empty());
    }

    #[test]
    fn convert_step_carries_label_and_options() {
        let step = Step::convert("x/choco/jams", "x/choco/jams-converted", "x", ["true", "false"]);
        assert_eq!(step.tool, Tool::Converter);
        assert_eq!(step.positional.len(), 5);
        assert_eq!(step.positional[2], ToolArg::Literal("x"));
        assert_eq!(step.positional[4], ToolArg::Literal("false"));
    }

    #[test]
    fn flags_append_in_order() {
        let step = Step::parse("x/raw", "x/choco", "lab", Modality::Audio)
            .flag(parser_flags::DATASET_NAME, ToolArg::Literal("x"))
            .flag(parser_flags::TRACK_META, ToolArg::PartitionPath("x/raw/meta.csv"));
        assert_eq!(step.flags.len(), 2);
        assert_eq!(step.flags[0].0, "--dataset_name");
        assert_eq!(step.flags[1].1, ToolArg::PartitionPath("x/raw/meta.csv"));
    }

    #[test]
    fn modality_tags() {
        assert_eq!(Modality::Audio.as_str(), "audio");
        assert_eq!(Modality::Score.to_string(), "score");
    }
}
