//! Built-in partition table.
//!
//! One entry per corpus partition, in the order conversions run for `all`.
//! Every dataset path is relative to the partitions root and follows the
//! corpus layout: `<partition>/raw` holds the source annotations,
//! `<partition>/choco` receives the JAMS output (with a `jams` subdirectory
//! consumed by the stats and converter steps), and metadata side files ride
//! along via parser flags. Chordify is the one cross-partition case: its
//! track metadata is produced by the billboard parse.

use super::partition::{Modality, Partition, Step, ToolArg};
use crate::constants::parser_flags;

/// The full partition table, in registry order.
pub(super) fn builtin_partitions() -> Vec<Partition> {
    vec![
        Partition::new(
            "isophonics",
            vec![
                Step::parse("isophonics/raw", "isophonics/choco", "lab", Modality::Audio)
                    .flag(parser_flags::DATASET_NAME, ToolArg::Literal("isophonics")),
                Step::stats("isophonics/choco/jams", "isophonics/choco"),
            ],
        ),
        // Winterreise ships parallel audio and score annotations, so it is
        // the one partition with two parse/stats rounds.
        Partition::new(
            "schubert-winterreise",
            vec![
                Step::parse(
                    "schubert-winterreise/raw",
                    "schubert-winterreise/choco/audio",
                    "csv",
                    Modality::Audio,
                )
                .flag(
                    parser_flags::TRACK_META,
                    ToolArg::PartitionPath("schubert-winterreise/raw/ann_audio_meta.csv"),
                ),
                Step::stats(
                    "schubert-winterreise/choco/audio/jams",
                    "schubert-winterreise/choco/audio",
                ),
                Step::parse(
                    "schubert-winterreise/raw",
                    "schubert-winterreise/choco/score",
                    "csv",
                    Modality::Score,
                )
                .flag(
                    parser_flags::SCORE_META,
                    ToolArg::PartitionPath("schubert-winterreise/raw/ann_score_meta.csv"),
                ),
                Step::stats(
                    "schubert-winterreise/choco/score/jams",
                    "schubert-winterreise/choco/score",
                ),
            ],
        ),
        Partition::new(
            "billboard",
            vec![
                Step::parse("billboard/raw", "billboard/choco", "lab", Modality::Audio)
                    .flag(parser_flags::DATASET_NAME, ToolArg::Literal("billboard"))
                    .flag(
                        parser_flags::TRACK_META,
                        ToolArg::PartitionPath("billboard/raw/billboard-2.0-index.csv"),
                    ),
                Step::stats("billboard/choco/jams", "billboard/choco"),
            ],
        ),
        // Depends on the metadata emitted by the billboard parse above.
        Partition::new(
            "chordify",
            vec![
                Step::parse("chordify/raw", "chordify/choco", "jams", Modality::Audio).flag(
                    parser_flags::TRACK_META,
                    ToolArg::PartitionPath("billboard/choco/meta.csv"),
                ),
                Step::stats("chordify/choco/jams", "chordify/choco"),
            ],
        ),
        Partition::new(
            "robbie-williams",
            vec![
                Step::parse(
                    "robbie-williams/raw",
                    "robbie-williams/choco",
                    "lab",
                    Modality::Audio,
                )
                .flag(parser_flags::DATASET_NAME, ToolArg::Literal("robbie-williams")),
                Step::stats("robbie-williams/choco/jams", "robbie-williams/choco"),
            ],
        ),
        Partition::new(
            "uspop2002",
            vec![
                Step::parse("uspop2002/raw", "uspop2002/choco", "lab", Modality::Audio)
                    .flag(parser_flags::DATASET_NAME, ToolArg::Literal("uspop2002"))
                    .flag(
                        parser_flags::RELEASE_META,
                        ToolArg::PartitionPath("uspop2002/raw/release_metadata.csv"),
                    ),
                Step::stats("uspop2002/choco/jams", "uspop2002/choco"),
            ],
        ),
        Partition::new(
            "rwc-pop",
            vec![
                Step::parse("rwc-pop/raw", "rwc-pop/choco", "lab", Modality::Audio)
                    .flag(parser_flags::DATASET_NAME, ToolArg::Literal("rwc-pop"))
                    .flag(
                        parser_flags::TRACK_META,
                        ToolArg::PartitionPath("rwc-pop/raw/track_metadata.csv"),
                    ),
                Step::stats("rwc-pop/choco/jams", "rwc-pop/choco"),
            ],
        ),
        Partition::new(
            "real-book",
            vec![
                Step::parse("real-book/raw", "real-book/choco", "xlab", Modality::Score),
                Step::stats("real-book/choco/jams", "real-book/choco"),
            ],
        ),
        Partition::new(
            "weimar",
            vec![
                Step::parse("weimar/raw", "weimar/choco", "csv", Modality::Score),
                Step::stats("weimar/choco/jams", "weimar/choco"),
                Step::convert(
                    "weimar/choco/jams",
                    "weimar/choco/jams-converted",
                    "weimar",
                    ["true", "false"],
                ),
            ],
        ),
        Partition::new(
            "wikifonia",
            vec![
                Step::parse("wikifonia/raw", "wikifonia/choco", "mxl", Modality::Score),
                Step::stats("wikifonia/choco/jams", "wikifonia/choco"),
            ],
        ),
        Partition::new(
            "ireal-pro",
            vec![
                Step::parse("ireal-pro/raw", "ireal-pro/choco", "ireal", Modality::Score),
                Step::stats("ireal-pro/choco/jams", "ireal-pro/choco"),
                Step::convert(
                    "ireal-pro/choco/jams",
                    "ireal-pro/choco/jams-converted",
                    "ireal-pro",
                    ["true", "false"],
                ),
            ],
        ),
        // Band-in-a-Box sources have no stats or converter support yet.
        Partition::new(
            "biab-internet-corpus",
            vec![Step::parse(
                "biab-internet-corpus/raw",
                "biab-internet-corpus/choco",
                "biab",
                Modality::Score,
            )],
        ),
        Partition::new(
            "when-in-rome",
            vec![
                Step::parse("when-in-rome/raw", "when-in-rome/choco", "roman", Modality::Score),
                Step::stats("when-in-rome/choco/jams", "when-in-rome/choco"),
                Step::convert(
                    "when-in-rome/choco/jams",
                    "when-in-rome/choco/jams-converted",
                    "when-in-rome",
                    ["true", "true"],
                ),
            ],
        ),
        Partition::new(
            "rock-corpus",
            vec![
                Step::parse("rock-corpus/raw", "rock-corpus/choco", "har", Modality::Score)
                    .flag(
                        parser_flags::CHORD_DIR,
                        ToolArg::PartitionPath("rock-corpus/raw/rs200_harmony_clt"),
                    )
                    .flag(
                        parser_flags::LKEY_DIR,
                        ToolArg::PartitionPath("rock-corpus/raw/rs200_key_clt"),
                    )
                    .flag(
                        parser_flags::GKEY_FILE,
                        ToolArg::PartitionPath("rock-corpus/raw/global_keys.csv"),
                    ),
                Step::stats("rock-corpus/choco/jams", "rock-corpus/choco"),
                Step::convert(
                    "rock-corpus/choco/jams",
                    "rock-corpus/choco/jams-converted",
                    "rock-corpus",
                    ["true", "false"],
                ),
            ],
        ),
        Partition::new(
            "jazz-corpus",
            vec![
                Step::parse("jazz-corpus/raw", "jazz-corpus/choco", "txt", Modality::Score),
                Step::stats("jazz-corpus/choco/jams", "jazz-corpus/choco"),
                Step::convert(
                    "jazz-corpus/choco/jams",
                    "jazz-corpus/choco/jams-converted",
                    "jazz-corpus",
                    ["true", "false"],
                ),
            ],
        ),
        Partition::new(
            "mozart-piano-sonatas",
            vec![
                Step::parse(
                    "mozart-piano-sonatas/raw",
                    "mozart-piano-sonatas/choco",
                    "dcml",
                    Modality::Score,
                )
                .flag(
                    parser_flags::SCORE_META,
                    ToolArg::PartitionPath("mozart-piano-sonatas/raw/metadata.tsv"),
                ),
                Step::stats("mozart-piano-sonatas/choco/jams", "mozart-piano-sonatas/choco"),
                Step::convert(
                    "mozart-piano-sonatas/choco/jams",
                    "mozart-piano-sonatas/choco/jams-converted",
                    "mozart-piano-sonatas",
                    ["true", "true"],
                ),
            ],
        ),
    ]
}
