//! Generation settings for the `crd` command

use crate::{CrossplaneGenError, CrossplaneGenResult};
use crossplane_schemagen::controller_gen::DEFAULT_BINARY;
use crossplane_xrd::TransformOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for one `crd` run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateCrdOptions {
    /// Raw options forwarded to the `crd` generator
    pub crd_options: Vec<String>,

    /// Raw options forwarded to the `schemapatch` generator
    pub schema_patch_options: Vec<String>,

    /// Claim kind written to `spec.claimNames.kind`
    pub claim_name: Option<String>,

    /// Claim plural written to `spec.claimNames.plural`
    pub claim_name_plural: Option<String>,
}

impl GenerateCrdOptions {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            claim_name: self.claim_name.clone(),
            claim_name_plural: self.claim_name_plural.clone(),
        }
    }
}

/// controller-gen executable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerGenConfig {
    /// Path to, or name on `PATH` of, the controller-gen binary
    pub binary: PathBuf,
}

impl ControllerGenConfig {
    pub fn validate(&self) -> CrossplaneGenResult<()> {
        if self.binary.as_os_str().is_empty() {
            return Err(CrossplaneGenError::Config(
                "controller-gen binary cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ControllerGenConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
        }
    }
}
