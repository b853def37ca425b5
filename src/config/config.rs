//! Main configuration structure and implementation

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ControllerGenConfig, GenerateCrdOptions};
use crate::{CrossplaneGenError, CrossplaneGenResult};

/// Supported configuration file version
pub const CONFIG_VERSION: &str = "1.0";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// controller-gen settings
    pub controller_gen: ControllerGenConfig,

    /// Defaults for the `crd` command
    pub crd: GenerateCrdOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            controller_gen: ControllerGenConfig::default(),
            crd: GenerateCrdOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> CrossplaneGenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> CrossplaneGenResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> CrossplaneGenResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(CrossplaneGenError::Config(format!(
                "Unsupported configuration version: {}",
                self.version
            )));
        }

        self.controller_gen.validate()?;

        Ok(())
    }
}
