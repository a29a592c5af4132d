//! Plugin runtime context
//!
//! [`Context`] holds the plugin's global state for one host activation: the
//! server handle, the published API object and the loaded configuration.
//! [`ContextHandle`] is the shared, clonable view the entry point constructs
//! and passes down to command handlers.

use imbridge_core::config::{BridgeConfig, ConfigLoader};
use imbridge_core::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::traits::{HostLogger, PluginApi, ServerHandle};

/// Key under which the host reports its working directory
const WORKING_DIR_KEY: &str = "working_directory";

/// Global state of one plugin activation
///
/// Lifecycle calls from the host (init, commands, shutdown) arrive
/// sequentially, so the state machine here is just the `initialized` flag:
/// API and config accessors are sequencing errors before `initialize`.
pub struct Context {
    server: Option<Arc<dyn ServerHandle>>,
    api: Option<Arc<dyn PluginApi>>,
    config: Option<BridgeConfig>,
    initialized: bool,
}

impl Context {
    /// Create an empty, uninitialized context
    pub fn new() -> Self {
        Self {
            server: None,
            api: None,
            config: None,
            initialized: false,
        }
    }

    /// Store the host server handle and mark the context initialized
    ///
    /// Idempotent: calling again overwrites the stored handle.
    pub fn initialize(&mut self, server: Arc<dyn ServerHandle>) {
        self.server = Some(server);
        self.initialized = true;
    }

    /// Whether `initialize` has been called since construction or last reset
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Publish (or clear, with `None`) the plugin API object
    pub fn set_api(&mut self, api: Option<Arc<dyn PluginApi>>) -> Result<()> {
        if !self.initialized {
            return Err(Error::not_initialized());
        }
        self.api = api;
        Ok(())
    }

    /// The published API object, if any
    pub fn api(&self) -> Result<Option<Arc<dyn PluginApi>>> {
        if !self.initialized {
            return Err(Error::not_initialized());
        }
        Ok(self.api.clone())
    }

    /// The loaded configuration, if any
    ///
    /// Absent both before `load_config` and after a failed load.
    pub fn config(&self) -> Result<Option<&BridgeConfig>> {
        if !self.initialized {
            return Err(Error::not_initialized());
        }
        Ok(self.config.as_ref())
    }

    /// The host's logging facility
    pub fn logger(&self) -> Result<Arc<dyn HostLogger>> {
        match &self.server {
            Some(server) => Ok(server.logger()),
            None => Err(Error::State(
                "server handle not set in context".to_string(),
            )),
        }
    }

    /// Clear all state and drop back to uninitialized
    pub fn reset(&mut self) {
        self.api = None;
        self.server = None;
        self.config = None;
        self.initialized = false;
    }

    /// Load the plugin configuration from the host working directory
    ///
    /// Collaborator failures (missing `working_directory` entry, missing or
    /// malformed config file) are logged through the host logger and leave
    /// the config absent; they are never surfaced to the caller. Only calling
    /// before `initialize` is an error.
    pub fn load_config(&mut self) -> Result<Option<&BridgeConfig>> {
        if !self.initialized {
            return Err(Error::not_initialized());
        }
        // initialized implies the server handle is present
        let server = self.server.clone().ok_or_else(Error::not_initialized)?;
        let logger = server.logger();

        match Self::read_host_config(server.as_ref()) {
            Ok(config) => {
                logger.info("Configuration loaded successfully");
                self.config = Some(config);
            }
            Err(e) => {
                logger.error(&format!("Failed to load configuration: {}", e));
                self.config = None;
            }
        }
        Ok(self.config.as_ref())
    }

    /// Resolve the host working area and parse the config found there
    fn read_host_config(server: &dyn ServerHandle) -> Result<BridgeConfig> {
        let dir = Self::host_work_dir(&server.runtime_config())?;
        ConfigLoader::load_from_dir(dir)
    }

    /// The directory the plugin config lives in: the parent of the host's
    /// reported working directory
    fn host_work_dir(runtime_config: &HashMap<String, String>) -> Result<PathBuf> {
        let working_dir = runtime_config.get(WORKING_DIR_KEY).ok_or_else(|| {
            Error::Config(format!(
                "Host runtime config has no '{}' entry",
                WORKING_DIR_KEY
            ))
        })?;
        let path = Path::new(working_dir);
        Ok(path.parent().unwrap_or(Path::new(".")).to_path_buf())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a [`Context`]
///
/// The entry point constructs one and passes clones down; all clones see the
/// same underlying context. The mutex keeps the handle sound if a host ever
/// calls in from another thread, but the host contract is sequential
/// dispatch and no operation blocks while holding the lock.
#[derive(Clone)]
pub struct ContextHandle {
    inner: Arc<Mutex<Context>>,
}

impl ContextHandle {
    /// Create a handle around a fresh, uninitialized context
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Context::new())),
        }
    }

    /// Whether two handles refer to the same underlying context
    pub fn same_instance(a: &ContextHandle, b: &ContextHandle) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// See [`Context::initialize`]
    pub fn initialize(&self, server: Arc<dyn ServerHandle>) {
        self.inner.lock().initialize(server);
    }

    /// See [`Context::is_initialized`]
    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_initialized()
    }

    /// See [`Context::set_api`]
    pub fn set_api(&self, api: Option<Arc<dyn PluginApi>>) -> Result<()> {
        self.inner.lock().set_api(api)
    }

    /// See [`Context::api`]
    pub fn api(&self) -> Result<Option<Arc<dyn PluginApi>>> {
        self.inner.lock().api()
    }

    /// See [`Context::config`]; returns an owned copy
    pub fn config(&self) -> Result<Option<BridgeConfig>> {
        Ok(self.inner.lock().config()?.cloned())
    }

    /// See [`Context::logger`]
    pub fn logger(&self) -> Result<Arc<dyn HostLogger>> {
        self.inner.lock().logger()
    }

    /// See [`Context::reset`]
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// See [`Context::load_config`]; returns an owned copy
    pub fn load_config(&self) -> Result<Option<BridgeConfig>> {
        Ok(self.inner.lock().load_config()?.cloned())
    }
}

impl Default for ContextHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TracingLogger;

    struct MockServer {
        runtime_config: HashMap<String, String>,
    }

    impl MockServer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                runtime_config: HashMap::new(),
            })
        }
    }

    impl ServerHandle for MockServer {
        fn logger(&self) -> Arc<dyn HostLogger> {
            Arc::new(TracingLogger)
        }

        fn runtime_config(&self) -> HashMap<String, String> {
            self.runtime_config.clone()
        }
    }

    struct DummyApi {
        marker: u32,
    }

    impl PluginApi for DummyApi {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_accessors_fail_before_initialize() {
        let mut ctx = Context::new();
        assert!(!ctx.is_initialized());
        assert!(matches!(ctx.api(), Err(Error::State(_))));
        assert!(matches!(ctx.config(), Err(Error::State(_))));
        assert!(matches!(ctx.logger(), Err(Error::State(_))));
        assert!(matches!(ctx.load_config(), Err(Error::State(_))));
        assert!(matches!(
            ctx.set_api(Some(Arc::new(DummyApi { marker: 0 }))),
            Err(Error::State(_))
        ));
    }

    #[test]
    fn test_initialize_and_reset() {
        let mut ctx = Context::new();
        ctx.initialize(MockServer::new());
        assert!(ctx.is_initialized());
        assert!(ctx.logger().is_ok());

        ctx.reset();
        assert!(!ctx.is_initialized());
        assert!(matches!(ctx.logger(), Err(Error::State(_))));
        assert!(matches!(ctx.api(), Err(Error::State(_))));
    }

    #[test]
    fn test_set_and_clear_api() {
        let mut ctx = Context::new();
        ctx.initialize(MockServer::new());

        let api: Arc<dyn PluginApi> = Arc::new(DummyApi { marker: 7 });
        ctx.set_api(Some(api.clone())).unwrap();

        let stored = ctx.api().unwrap().unwrap();
        assert!(Arc::ptr_eq(&stored, &api));
        let dummy = stored.as_any().downcast_ref::<DummyApi>().unwrap();
        assert_eq!(dummy.marker, 7);

        ctx.set_api(None).unwrap();
        assert!(ctx.api().unwrap().is_none());
    }

    #[test]
    fn test_initialize_overwrites_server() {
        let mut ctx = Context::new();
        ctx.initialize(MockServer::new());
        ctx.initialize(MockServer::new());
        assert!(ctx.is_initialized());
    }

    #[test]
    fn test_host_work_dir_is_parent() {
        let mut runtime_config = HashMap::new();
        runtime_config.insert(
            WORKING_DIR_KEY.to_string(),
            "/srv/host/server".to_string(),
        );
        let dir = Context::host_work_dir(&runtime_config).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/host"));
    }

    #[test]
    fn test_host_work_dir_missing_entry() {
        let runtime_config = HashMap::new();
        assert!(matches!(
            Context::host_work_dir(&runtime_config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_handle_clones_share_state() {
        let handle = ContextHandle::new();
        let clone = handle.clone();
        assert!(ContextHandle::same_instance(&handle, &clone));

        handle.initialize(MockServer::new());
        assert!(clone.is_initialized());

        clone.reset();
        assert!(!handle.is_initialized());
    }

    #[test]
    fn test_fresh_handles_are_distinct() {
        let a = ContextHandle::new();
        let b = ContextHandle::new();
        assert!(!ContextHandle::same_instance(&a, &b));
    }
}
