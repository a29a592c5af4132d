//! Imbridge Plugin Runtime
//!
//! Host integration layer for the Imbridge plugin: the runtime context
//! holding the plugin's global state, the traits the host and the plugin
//! implement against each other, and a process-wide context slot for host
//! runtimes that dispatch lifecycle callbacks through free functions.

mod context;
mod global;
mod traits;

pub use context::{Context, ContextHandle};
pub use global::{get_instance, reset_instance};
pub use traits::{HostLogger, Plugin, PluginApi, PluginInfo, ServerHandle, TracingLogger};

pub use imbridge_core::{Error, Result};
