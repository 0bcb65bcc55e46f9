//! Error types emitted by the msinm CLI.

use camino::Utf8PathBuf;
use msinm_core::{LocationError, PositionFormatError};
use thiserror::Error;

/// Errors emitted by the msinm CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A subcommand was invoked without any of its value options.
    #[error("missing argument: provide {expected}")]
    MissingArgument {
        /// Options the subcommand accepts.
        expected: &'static str,
    },
    /// A position string failed to parse.
    #[error(transparent)]
    Position(#[from] PositionFormatError),
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// Path given on the command line.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An input file was not valid JSON.
    #[error("failed to parse JSON in {path}: {source}")]
    ParseJson {
        /// Path given on the command line.
        path: Utf8PathBuf,
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A location file violated the shape invariants.
    #[error("invalid location in {path}: {source}")]
    InvalidLocation {
        /// Path given on the command line.
        path: Utf8PathBuf,
        /// The violated invariant.
        #[source]
        source: LocationError,
    },
    /// Serialising the feature output failed.
    #[error("failed to serialize features: {0}")]
    EncodeFeatures(#[source] serde_json::Error),
}
