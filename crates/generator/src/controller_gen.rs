//! controller-gen subprocess runner

use crate::error::GeneratorError;
use crate::options::GeneratorOptions;
use crate::registry::GeneratorRegistry;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Default controller-gen executable, resolved through `PATH`
pub const DEFAULT_BINARY: &str = "controller-gen";

/// Writes one CRD YAML file per discovered API kind into `options.output_dir`
#[async_trait]
pub trait SchemaGenerator: Send + Sync {
    async fn generate(&self, options: &GeneratorOptions) -> Result<(), GeneratorError>;
}

/// Runs the `controller-gen` binary
#[derive(Debug, Clone)]
pub struct ControllerGen {
    binary: PathBuf,
    registry: GeneratorRegistry,
}

impl Default for ControllerGen {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl ControllerGen {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            registry: GeneratorRegistry::default(),
        }
    }

    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }
}

#[async_trait]
impl SchemaGenerator for ControllerGen {
    async fn generate(&self, options: &GeneratorOptions) -> Result<(), GeneratorError> {
        let args = options.to_args();
        debug!("Options: {:?}", args);

        let generators = self.registry.enabled_generators(&args)?;
        debug!("Running {:?} with generators {:?}", self.binary, generators);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|source| GeneratorError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("controller-gen output: {}", stdout.trim());
        }

        if !output.status.success() {
            return Err(GeneratorError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("CRD generated with controller-gen");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_no_generators_does_not_spawn() {
        let temp_dir = TempDir::new().unwrap();
        let generator = ControllerGen::new(temp_dir.path().join("does-not-exist"))
            .with_registry(GeneratorRegistry::without_generators());

        let err = generator
            .generate(&GeneratorOptions::new("./...", temp_dir.path()))
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::NoGenerators));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("does-not-exist");
        let generator = ControllerGen::new(&binary);

        let err = generator
            .generate(&GeneratorOptions::new("./...", temp_dir.path()))
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Spawn { binary: b, .. } if b == binary));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_generator() {
        let temp_dir = TempDir::new().unwrap();
        let generator = ControllerGen::new("false");

        let err = generator
            .generate(&GeneratorOptions::new("./...", temp_dir.path()))
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Failed { status, .. } if !status.success()));
    }
}
