//! Plugin and host traits

use imbridge_core::Result;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::context::ContextHandle;

/// Logging facility handed out by the host runtime
pub trait HostLogger: Send + Sync {
    /// Log an informational line
    fn info(&self, message: &str);

    /// Log a warning line
    fn warn(&self, message: &str);

    /// Log an error line
    fn error(&self, message: &str);
}

/// Host logger backed by `tracing`
///
/// Used by hosts that have no logging facility of their own.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl HostLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "imbridge", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "imbridge", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "imbridge", "{}", message);
    }
}

/// Handle to the host runtime
///
/// The context only ever reads from this handle; ownership stays with the
/// host for the whole plugin activation.
pub trait ServerHandle: Send + Sync {
    /// The host's logging facility
    fn logger(&self) -> Arc<dyn HostLogger>;

    /// The host's own configuration, as reported by the host
    ///
    /// Must contain a `working_directory` entry for plugin config loading
    /// to succeed.
    fn runtime_config(&self) -> HashMap<String, String>;
}

/// API object published by the plugin for other plugins to consume
///
/// The context stores it without enforcing any contract beyond reference
/// storage; consumers downcast through [`PluginApi::as_any`].
pub trait PluginApi: Send + Sync {
    /// Downcast seam for consumers that know the concrete API type
    fn as_any(&self) -> &dyn Any;
}

/// Plugin information
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Plugin name
    pub name: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
}

/// Main plugin trait
///
/// Lifecycle callbacks are invoked sequentially by the host, never
/// concurrently.
pub trait Plugin: Send + Sync {
    /// Get plugin information
    fn info(&self) -> PluginInfo;

    /// Initialize the plugin
    fn init(&mut self, ctx: &ContextHandle) -> Result<()>;

    /// Shutdown the plugin
    fn shutdown(&mut self) -> Result<()>;
}
