//! Engine configuration shared by the library and the CLI.

use crate::domain::EuvError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_COEFFICIENT_DIR: &str = "data/coefficients";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Directory holding the `<variant>_<domain>_dataset.json` coefficient tables.
    #[serde(rename = "coefficientDir", default = "default_coefficient_dir")]
    pub coefficient_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coefficient_dir: default_coefficient_dir(),
        }
    }
}

impl EngineConfig {
    pub fn with_coefficient_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.coefficient_dir = directory.into();
        self
    }

    /// Makes a relative coefficient directory absolute against `base`.
    pub fn resolved_against(mut self, base: &Path) -> Self {
        if self.coefficient_dir.is_relative() {
            self.coefficient_dir = base.join(&self.coefficient_dir);
        }
        self
    }
}

fn default_coefficient_dir() -> PathBuf {
    PathBuf::from(DEFAULT_COEFFICIENT_DIR)
}

#[derive(Debug, thiserror::Error)]
pub enum EngineConfigError {
    #[error("failed to read engine config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse engine config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<EngineConfigError> for EuvError {
    fn from(error: EngineConfigError) -> Self {
        match &error {
            EngineConfigError::Read { .. } => {
                EuvError::io_system("IO.ENGINE_CONFIG", error.to_string())
            }
            EngineConfigError::Parse { .. } => {
                EuvError::input_validation("INPUT.ENGINE_CONFIG", error.to_string())
            }
        }
    }
}

pub fn load_engine_config(path: impl AsRef<Path>) -> Result<EngineConfig, EngineConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| EngineConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| EngineConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
