//! Generator error types

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("unknown generator option: {0}")]
    UnknownOption(String),

    #[error("no generators specified")]
    NoGenerators,

    #[error("failed to run {binary:?}")]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not all generators ran successfully ({status}): {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}
