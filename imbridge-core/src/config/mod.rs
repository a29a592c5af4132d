//! Configuration management
//!
//! Owned configuration types and the loader that constructs them from files
//! in the host working directory.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BridgeConfig, PlatformConfig};
