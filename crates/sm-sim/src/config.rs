use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sm_core::{ErrorInfo, SmError, Tolerances};

/// Settings for one CLI run. Every field is optional in YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Master seed; each decaying roster member draws from its own substream.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Validation and conservation tolerances.
    #[serde(default)]
    pub tolerances: Tolerances,
}

fn default_seed() -> u64 {
    2024
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tolerances: Tolerances::default(),
        }
    }
}

impl RunConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, SmError> {
        let config: RunConfig = serde_yaml::from_str(contents).map_err(|err| {
            SmError::Config(
                ErrorInfo::new("invalid-run-config", "run configuration is not valid YAML")
                    .with_context("detail", err),
            )
        })?;
        config.tolerances.validate()?;
        Ok(config)
    }

    /// Reads and validates the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, SmError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            SmError::Config(
                ErrorInfo::new("unreadable-run-config", "cannot read run configuration")
                    .with_context("path", path.display())
                    .with_context("detail", err),
            )
        })?;
        Self::from_yaml_str(&contents)
    }
}
