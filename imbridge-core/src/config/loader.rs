//! Configuration loader

use crate::config::BridgeConfig;
use crate::error::{Error, Result};
use std::path::Path;

/// File names probed, in order, when loading from a directory.
const CANDIDATES: [&str; 2] = ["imbridge.toml", "imbridge.json"];

/// Configuration loader for various formats
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BridgeConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            _ => Err(Error::Config(format!("Unknown config format: {}", ext))),
        }
    }

    /// Load configuration from the host working directory
    ///
    /// Probes for `imbridge.toml`, then `imbridge.json`. Missing both is a
    /// configuration error, distinct from a malformed file.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<BridgeConfig> {
        let dir = dir.as_ref();
        for name in CANDIDATES {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::load(&path);
            }
        }
        Err(Error::Config(format!(
            "No configuration file found in {}",
            dir.display()
        )))
    }

    /// Parse JSON configuration
    pub fn from_json(content: &str) -> Result<BridgeConfig> {
        serde_json::from_str(content).map_err(|e| Error::Config(format!("Invalid JSON: {}", e)))
    }

    /// Parse TOML configuration
    pub fn from_toml(content: &str) -> Result<BridgeConfig> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }
}
