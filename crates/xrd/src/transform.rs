//! Rewrites generated CustomResourceDefinitions into Crossplane CompositeResourceDefinitions

use crate::document::Document;
use crate::error::ShapeError;
use serde_yaml::{Mapping, Sequence, Value};
use tracing::{debug, warn};

/// API version of every emitted XRD
pub const XRD_API_VERSION: &str = "apiextensions.crossplane.io/v1";

/// Kind of every emitted XRD
pub const XRD_KIND: &str = "CompositeResourceDefinition";

/// Properties that belong to the composite wrapper, not the schema of a version
const IDENTITY_PROPERTIES: [&str; 3] = ["apiVersion", "kind", "metadata"];

/// Claim settings applied to every transformed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub claim_name: Option<String>,
    pub claim_name_plural: Option<String>,
}

impl TransformOptions {
    pub fn claim_name(&self) -> Option<&str> {
        non_empty(&self.claim_name)
    }

    pub fn claim_name_plural(&self) -> Option<&str> {
        non_empty(&self.claim_name_plural)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Turns CRD documents into XRD documents
#[derive(Debug, Clone)]
pub struct XrdTransformer {
    options: TransformOptions,
}

impl XrdTransformer {
    pub fn new(options: TransformOptions) -> Self {
        if options.claim_name().is_none() {
            if let Some(plural) = options.claim_name_plural() {
                warn!(
                    "Claim plural name {:?} is ignored because no claim name was given",
                    plural
                );
            }
        }

        Self { options }
    }

    /// Transform one CRD document.
    ///
    /// The whole shape is checked before any edit, so on error the input is
    /// dropped without ever being half-rewritten.
    pub fn transform(&self, mut doc: Document) -> Result<Document, ShapeError> {
        check_shape(&doc)?;

        let root = doc.root_mut();
        root.insert("apiVersion".into(), XRD_API_VERSION.into());
        root.insert("kind".into(), XRD_KIND.into());

        let metadata = mapping_mut(root, "metadata", "metadata")?;
        metadata.remove("creationTimestamp");
        metadata.remove("annotations");

        let spec = mapping_mut(root, "spec", "spec")?;
        spec.remove("scope");

        if let Some(claim_names) = self.claim_names() {
            spec.insert("claimNames".into(), Value::Mapping(claim_names));
        }

        let versions = sequence_mut(spec, "versions", "spec.versions")?;
        for (index, version) in versions.iter_mut().enumerate() {
            let path = format!("spec.versions[{index}]");
            let version = version
                .as_mapping_mut()
                .ok_or_else(|| ShapeError::mapping(path.as_str()))?;

            version.remove("storage");
            version.insert("referenceable".into(), Value::Bool(true));

            let properties = version_properties_mut(version, &path)?;
            for field in IDENTITY_PROPERTIES {
                properties.remove(field);
            }

            debug!("Rewrote {}", path);
        }

        Ok(doc)
    }

    fn claim_names(&self) -> Option<Mapping> {
        let kind = self.options.claim_name()?;

        let mut claim_names = Mapping::new();
        claim_names.insert("kind".into(), kind.into());
        if let Some(plural) = self.options.claim_name_plural() {
            claim_names.insert("plural".into(), plural.into());
        }

        Some(claim_names)
    }
}

fn check_shape(doc: &Document) -> Result<(), ShapeError> {
    let root = doc.root();
    mapping(root, "metadata", "metadata")?;

    let spec = mapping(root, "spec", "spec")?;
    let versions = spec
        .get("versions")
        .and_then(Value::as_sequence)
        .ok_or_else(|| ShapeError::sequence("spec.versions"))?;

    for (index, version) in versions.iter().enumerate() {
        let path = format!("spec.versions[{index}]");
        let version = version
            .as_mapping()
            .ok_or_else(|| ShapeError::mapping(path.as_str()))?;

        let schema = mapping(version, "schema", &format!("{path}.schema"))?;
        let open_api = mapping(
            schema,
            "openAPIV3Schema",
            &format!("{path}.schema.openAPIV3Schema"),
        )?;
        mapping(
            open_api,
            "properties",
            &format!("{path}.schema.openAPIV3Schema.properties"),
        )?;
    }

    Ok(())
}

fn mapping<'a>(parent: &'a Mapping, key: &str, path: &str) -> Result<&'a Mapping, ShapeError> {
    parent
        .get(key)
        .and_then(Value::as_mapping)
        .ok_or_else(|| ShapeError::mapping(path))
}

fn mapping_mut<'a>(
    parent: &'a mut Mapping,
    key: &str,
    path: &str,
) -> Result<&'a mut Mapping, ShapeError> {
    parent
        .get_mut(key)
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| ShapeError::mapping(path))
}

fn sequence_mut<'a>(
    parent: &'a mut Mapping,
    key: &str,
    path: &str,
) -> Result<&'a mut Sequence, ShapeError> {
    parent
        .get_mut(key)
        .and_then(Value::as_sequence_mut)
        .ok_or_else(|| ShapeError::sequence(path))
}

fn version_properties_mut<'a>(
    version: &'a mut Mapping,
    path: &str,
) -> Result<&'a mut Mapping, ShapeError> {
    let schema = mapping_mut(version, "schema", &format!("{path}.schema"))?;
    let open_api = mapping_mut(
        schema,
        "openAPIV3Schema",
        &format!("{path}.schema.openAPIV3Schema"),
    )?;
    mapping_mut(
        open_api,
        "properties",
        &format!("{path}.schema.openAPIV3Schema.properties"),
    )
}
