//! Crossplane XRD Generator Library
//!
//! Generates Crossplane CompositeResourceDefinitions from annotated Go API
//! types. CRDs are produced by controller-gen into a scratch directory and
//! then rewritten into XRDs.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{Config, ControllerGenConfig, GenerateCrdOptions};
pub use crossplane_schemagen::{
    ControllerGen, GeneratorError, GeneratorOptions, GeneratorRegistry, SchemaGenerator,
};
pub use crossplane_xrd::{Document, DocumentError, ShapeError, TransformOptions, XrdTransformer};

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Prefix of the scratch directory controller-gen writes into
pub const TEMP_DIR_PREFIX: &str = "crossplaneG";

/// Runs schema generation and rewrites every generated CRD into an XRD
pub struct CrossplaneGen<G = ControllerGen> {
    generator: G,
}

impl CrossplaneGen<ControllerGen> {
    /// Create an instance backed by the configured controller-gen binary
    pub fn from_config(config: &Config) -> Self {
        Self::new(ControllerGen::new(config.controller_gen.binary.clone()))
    }
}

impl<G: SchemaGenerator> CrossplaneGen<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate XRDs for every API kind found under `source_path` into `target_path`.
    ///
    /// Stops at the first failing file; files already written stay in place.
    pub async fn generate_crd(
        &self,
        source_path: &str,
        target_path: &Path,
        options: &GenerateCrdOptions,
    ) -> CrossplaneGenResult<GenerationSummary> {
        let start = Instant::now();

        let temp_dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(CrossplaneGenError::TempDir)?;

        let generator_options = GeneratorOptions::new(source_path, temp_dir.path())
            .with_crd_options(options.crd_options.clone())
            .with_schema_patch_options(options.schema_patch_options.clone());

        info!("Generating CRDs from {}", source_path);
        self.generator.generate(&generator_options).await?;

        utils::ensure_directory(target_path).map_err(|source| CrossplaneGenError::TargetDir {
            path: target_path.to_path_buf(),
            source,
        })?;

        let transformer = XrdTransformer::new(options.transform_options());
        let mut files = Vec::new();

        for path in utils::find_generated_files(temp_dir.path())? {
            let file = utils::file_name(&path);
            debug!("Process file {}", file);

            let crd = Document::load(&path).map_err(|source| CrossplaneGenError::Document {
                file: file.clone(),
                source,
            })?;

            let xrd = transformer
                .transform(crd)
                .map_err(|source| CrossplaneGenError::Shape {
                    file: file.clone(),
                    source,
                })?;

            let written = xrd
                .write(target_path, &file)
                .map_err(|source| CrossplaneGenError::Document {
                    file: file.clone(),
                    source,
                })?;

            info!("Generated XRD {:?}", written);
            files.push(written);
        }

        Ok(GenerationSummary {
            files,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Outcome of a successful `generate_crd` run
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Written XRD files, in processing order
    pub files: Vec<PathBuf>,

    /// Wall time of the whole run
    pub processing_time_ms: u64,
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum CrossplaneGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema generation failed")]
    Generation(#[from] GeneratorError),

    #[error("Failed to create temporary directory")]
    TempDir(#[source] std::io::Error),

    #[error("Failed to prepare target directory {path:?}")]
    TargetDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk generated files")]
    Walk(#[from] walkdir::Error),

    #[error("Error when processing file {file}")]
    Document {
        file: String,
        #[source]
        source: DocumentError,
    },

    #[error("File {file} is not a valid CRD")]
    Shape {
        file: String,
        #[source]
        source: ShapeError,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_yaml::Error),
}

/// Result type for the main application
pub type CrossplaneGenResult<T> = Result<T, CrossplaneGenError>;
