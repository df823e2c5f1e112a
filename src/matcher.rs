use std::io;

use thiserror::Error;

mod spec;
pub use self::spec::{MatchKind, MatchSpec};

mod engine;
pub use self::engine::Matcher;

/// Errors surfaced by matcher construction and the scan itself.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A flag token outside the recognized set of -p, -c and -pc.
    #[error("unrecognized flag: {0}")]
    UnrecognizedFlag(String),

    /// A pattern failed to evaluate against a line. Fatal to the run.
    #[error("failed to evaluate pattern {pattern:?}: {source}")]
    MatchEvaluation {
        pattern: String,
        source: regex::Error,
    },

    /// The input stream could not be opened or read.
    #[error("input unavailable: {0}")]
    InputUnavailable(io::Error),

    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    OutputUnavailable(io::Error),
}
