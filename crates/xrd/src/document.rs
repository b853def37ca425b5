//! Generic YAML document loading and writing

use crate::error::DocumentError;
use serde_yaml::{Mapping, Value};
use std::cmp::Ordering;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One YAML file, held as a mapping at the document root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document(Mapping);

impl Document {
    /// Read and parse a YAML document from disk
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        debug!("Loading document {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse YAML content; `origin` is only used for error reporting
    pub fn parse(content: &str, origin: &Path) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(content).map_err(|source| DocumentError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        match value {
            Value::Mapping(root) => Ok(Self(root)),
            _ => Err(DocumentError::NotAMapping {
                path: origin.to_path_buf(),
            }),
        }
    }

    pub fn root(&self) -> &Mapping {
        &self.0
    }

    pub fn root_mut(&mut self) -> &mut Mapping {
        &mut self.0
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Serialize with every mapping's keys sorted
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        let canonical = canonicalize(&Value::Mapping(self.0.clone()));
        serde_yaml::to_string(&canonical).map_err(DocumentError::Serialize)
    }

    /// Write the document to `target_dir/file_name`, replacing any existing file
    pub fn write(&self, target_dir: &Path, file_name: &str) -> Result<PathBuf, DocumentError> {
        let path = target_dir.join(file_name);
        let content = self.to_yaml()?;

        create_file(&path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|source| DocumentError::Write {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote document {:?}", path);
        Ok(path)
    }
}

fn create_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Mapping(mapping) => {
            let mut entries: Vec<(&Value, &Value)> = mapping.iter().collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), canonicalize(value)))
                    .collect(),
            )
        }
        Value::Sequence(items) => Value::Sequence(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

// String keys sort lexically and ahead of anything else; other keys keep their order.
fn compare_keys(a: &Value, b: &Value) -> Ordering {
    match (a.as_str(), b.as_str()) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
