//! Error types for document handling

use std::path::PathBuf;

/// Errors raised while reading or writing a document
#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?} as YAML")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document root of {path:?} is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("failed to serialize document")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document lacks a field the transformer depends on, or the field has the wrong type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{path}` is missing or is not a {expected}")]
pub struct ShapeError {
    /// Dotted path of the offending field
    pub path: String,

    /// Expected YAML type
    pub expected: &'static str,
}

impl ShapeError {
    pub fn mapping(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: "mapping",
        }
    }

    pub fn sequence(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: "sequence",
        }
    }
}
