//! Configuration type definitions
//!
//! These types represent the runtime configuration for the Imbridge plugin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for the Imbridge plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Debug mode
    #[serde(default)]
    pub debug: bool,

    /// Prefix for in-game bridge commands
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Messaging platform configurations
    #[serde(default)]
    pub platforms: Vec<PlatformConfig>,
}

fn default_command_prefix() -> String {
    "!!im".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            debug: false,
            command_prefix: default_command_prefix(),
            platforms: Vec::new(),
        }
    }
}

/// Configuration for a single messaging platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Platform name (e.g. "telegram", "discord")
    pub name: String,

    /// Whether the platform bridge is active
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Bot token or credential, if the platform needs one
    pub token: Option<String>,

    /// Platform-specific options passed through verbatim
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

fn default_enabled() -> bool {
    true
}

impl BridgeConfig {
    /// Look up a platform section by name.
    pub fn platform(&self, name: &str) -> Option<&PlatformConfig> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// Names of all enabled platforms.
    pub fn enabled_platforms(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .filter(|p| p.enabled)
            .map(|p| p.name.as_str())
            .collect()
    }
}
