//! Process-wide context slot
//!
//! Host runtimes that dispatch lifecycle callbacks through free functions
//! have no place to thread a [`ContextHandle`] through; this module gives
//! them one shared instance for the process. Hosts that do pass state down
//! should construct a `ContextHandle` directly and skip this module.

use parking_lot::Mutex;

use crate::context::ContextHandle;

static INSTANCE: Mutex<Option<ContextHandle>> = Mutex::new(None);

/// The shared context handle, created on first call
///
/// Every call returns a handle to the same underlying context until
/// [`reset_instance`] drops it.
pub fn get_instance() -> ContextHandle {
    let mut slot = INSTANCE.lock();
    slot.get_or_insert_with(|| {
        tracing::debug!(target: "imbridge", "Creating process-wide context");
        ContextHandle::new()
    })
    .clone()
}

/// Reset and drop the shared context
///
/// The current instance, if any, is cleared first so handles still held
/// elsewhere observe the teardown; the next [`get_instance`] builds a fresh
/// one. Used for plugin reloads and shutdown.
pub fn reset_instance() {
    let mut slot = INSTANCE.lock();
    if let Some(handle) = slot.take() {
        handle.reset();
    }
}
