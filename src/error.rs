use std::io;

use thiserror::Error;

/// Errors raised while loading corpora, training or tagging
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A corpus or result file contains a record that cannot be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("tokens and tags must have the same length ({tokens} != {tags})")]
    LengthMismatch { tokens: usize, tags: usize },
    #[error("empty sequences are not allowed")]
    EmptySequence,
    /// A gold tag that is not part of the model's tag set
    #[error("unknown tag: {0}")]
    UnknownTag(String),
    #[error("tag set is empty, cannot decode a non-empty sentence")]
    EmptyTagSet,
    #[error("{0}")]
    InvalidParameter(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
