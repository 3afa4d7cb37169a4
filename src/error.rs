use std::{fmt, io};

use thiserror::Error;

/// Pipeline stage that touched the filesystem when an I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the name pool.
    Load,
    /// Writing the serialized records.
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Load => write!(f, "load"),
            Stage::Write => write!(f, "write"),
        }
    }
}

#[derive(Error, Debug)]
/// Fixture generation error
pub enum FixtureError {
    #[error("{stage} stage failed on '{target}': {source}")]
    FileAccess {
        stage: Stage,
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("sample stage failed: pool '{pool}' has no reachable entry")]
    EmptyPool { pool: String },

    #[error("sample stage failed: index {index} is out of range for pool '{pool}' of length {len}")]
    IndexOutOfRange {
        pool: String,
        index: usize,
        len: usize,
    },
}

impl FixtureError {
    pub(crate) fn load(target: impl fmt::Display, source: io::Error) -> Self {
        FixtureError::FileAccess {
            stage: Stage::Load,
            target: target.to_string(),
            source,
        }
    }

    pub(crate) fn write(target: impl fmt::Display, source: io::Error) -> Self {
        FixtureError::FileAccess {
            stage: Stage::Write,
            target: target.to_string(),
            source,
        }
    }

    /// Returns the stage an I/O failure happened in, if this is a file access error.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            FixtureError::FileAccess { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
