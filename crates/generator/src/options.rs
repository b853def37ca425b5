//! Option list handed to the schema generator

use std::path::{Path, PathBuf};

/// Everything a single generator run needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Source discovery root, e.g. `./apis/...`
    pub source_path: String,

    /// Directory the generator writes CRDs into
    pub output_dir: PathBuf,

    /// Raw options for the `crd` generator
    pub crd_options: Vec<String>,

    /// Raw options for the `schemapatch` generator
    pub schema_patch_options: Vec<String>,
}

impl GeneratorOptions {
    pub fn new(source_path: impl Into<String>, output_dir: &Path) -> Self {
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_crd_options(mut self, crd_options: Vec<String>) -> Self {
        self.crd_options = crd_options;
        self
    }

    pub fn with_schema_patch_options(mut self, schema_patch_options: Vec<String>) -> Self {
        self.schema_patch_options = schema_patch_options;
        self
    }

    /// Render the controller-gen argument list
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("paths=\"{}\"", self.source_path),
            format!("output:crd:artifacts:config=\"{}\"", self.output_dir.display()),
        ];

        if self.crd_options.is_empty() {
            args.push("crd".to_string());
        } else {
            args.extend(self.crd_options.iter().map(|o| format!("crd:{o}")));
        }

        args.extend(
            self.schema_patch_options
                .iter()
                .map(|o| format!("schemapatch:{o}")),
        );

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crd_generation() {
        let options = GeneratorOptions::new("./apis/...", Path::new("/tmp/out"));

        assert_eq!(
            options.to_args(),
            vec![
                "paths=\"./apis/...\"",
                "output:crd:artifacts:config=\"/tmp/out\"",
                "crd",
            ]
        );
    }

    #[test]
    fn test_crd_and_schema_patch_options() {
        let options = GeneratorOptions::new("./apis/...", Path::new("/tmp/out"))
            .with_crd_options(vec![
                "generateEmbeddedObjectMeta=true".to_string(),
                "maxDescLen=0".to_string(),
            ])
            .with_schema_patch_options(vec!["manifests=./crds".to_string()]);

        assert_eq!(
            options.to_args(),
            vec![
                "paths=\"./apis/...\"",
                "output:crd:artifacts:config=\"/tmp/out\"",
                "crd:generateEmbeddedObjectMeta=true",
                "crd:maxDescLen=0",
                "schemapatch:manifests=./crds",
            ]
        );
    }
}
