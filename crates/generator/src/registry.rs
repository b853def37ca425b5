//! Known generators and output rules
//!
//! controller-gen options are markers of the form `name[:sub...][=args]`.
//! The registry classifies each option before the generator is spawned so
//! typos fail fast with a readable message instead of a usage dump.

use crate::error::GeneratorError;
use std::collections::BTreeSet;

/// Generators controller-gen ships with
pub const DEFAULT_GENERATORS: [&str; 5] = ["crd", "rbac", "object", "webhook", "schemapatch"];

/// Output rules controller-gen ships with
pub const DEFAULT_OUTPUT_RULES: [&str; 4] = ["dir", "none", "stdout", "artifacts"];

const COMMON_OPTIONS: [&str; 1] = ["paths"];

/// What an option string configures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Shared option such as `paths=...`
    Common,

    /// Enables or configures a generator
    Generator(String),

    /// `output:<rule>` for every generator
    DefaultOutput(String),

    /// `output:<generator>:<rule>`
    GeneratorOutput { generator: String, rule: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRegistry {
    generators: BTreeSet<String>,
    output_rules: BTreeSet<String>,
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATORS, DEFAULT_OUTPUT_RULES)
    }
}

impl GeneratorRegistry {
    pub fn new<G, R>(generators: G, output_rules: R) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            generators: generators.into_iter().map(Into::into).collect(),
            output_rules: output_rules.into_iter().map(Into::into).collect(),
        }
    }

    /// A registry with output rules but no generators
    pub fn without_generators() -> Self {
        Self::new(Vec::<String>::new(), DEFAULT_OUTPUT_RULES)
    }

    pub fn has_generator(&self, name: &str) -> bool {
        self.generators.contains(name)
    }

    pub fn classify(&self, option: &str) -> Option<OptionKind> {
        let name = option.split('=').next().unwrap_or_default();
        let segments: Vec<&str> = name.split(':').collect();

        match segments.as_slice() {
            [first, ..] if COMMON_OPTIONS.contains(first) => Some(OptionKind::Common),
            ["output", rule, ..] if self.output_rules.contains(*rule) => {
                Some(OptionKind::DefaultOutput(rule.to_string()))
            }
            ["output", generator, rule, ..]
                if self.generators.contains(*generator) && self.output_rules.contains(*rule) =>
            {
                Some(OptionKind::GeneratorOutput {
                    generator: generator.to_string(),
                    rule: rule.to_string(),
                })
            }
            [first, ..] if self.generators.contains(*first) => {
                Some(OptionKind::Generator(first.to_string()))
            }
            _ => None,
        }
    }

    /// Validate an option list and return the generators it enables, in order
    pub fn enabled_generators(&self, options: &[String]) -> Result<Vec<String>, GeneratorError> {
        let mut enabled = Vec::new();
        for option in options {
            let name = option.split(['=', ':']).next().unwrap_or_default();
            if self.has_generator(name) && !enabled.iter().any(|g| g == name) {
                enabled.push(name.to_string());
            }
        }

        if enabled.is_empty() {
            return Err(GeneratorError::NoGenerators);
        }

        if let Some(unknown) = options.iter().find(|o| self.classify(o).is_none()) {
            return Err(GeneratorError::UnknownOption(unknown.clone()));
        }

        Ok(enabled)
    }
}
