//! Process-wide mapping from thread ids to thread names.
//!
//! Every thread keeps its own name in thread-local storage, so asking for the current thread's name never locks.
//! Looking up the name of another thread goes through the shared [`NameRegistry`], whose map is guarded by a single
//! mutex. Entries are never removed: the registry grows by one entry per named thread for the life of the process.

use std::cell::RefCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::thread::{Thread, ThreadAbstraction, ThreadId, ThreadName};

thread_local! {
    /// The name registered by the current thread, if any.
    static CURRENT_NAME: RefCell<Option<ThreadName>> = const { RefCell::new(None) };
}

/// Shared map of thread names, see the [module documentation](self).
///
/// There is exactly one registry per process, reachable through [`NameRegistry::global`].
#[derive(Debug)]
pub struct NameRegistry {
    names: Mutex<FxHashMap<ThreadId, ThreadName>>,
}

impl NameRegistry {
    const fn new() -> Self {
        Self {
            names: Mutex::new(FxHashMap::with_hasher(FxBuildHasher)),
        }
    }

    /// Returns the registry of this process.
    pub fn global() -> &'static NameRegistry {
        static REGISTRY: NameRegistry = NameRegistry::new();
        &REGISTRY
    }

    /// Names the calling thread.
    ///
    /// The first registration of a thread wins, later calls from the same thread are ignored. Empty names are ignored
    /// as well, they do not count as a registration.
    pub fn register_current_thread(&self, name: &str) {
        if name.is_empty() {
            return;
        }

        let registered = CURRENT_NAME.with_borrow_mut(|slot| {
            if slot.is_some() {
                return None;
            }
            let name = ThreadName::new_truncated(name);
            *slot = Some(name.clone());
            Some(name)
        });

        let Some(name) = registered else {
            tracing::trace!(name, "thread already named, ignoring new name");
            return;
        };

        let id = Thread::current_thread_id();
        self.lock().insert(id, name.clone());
        tracing::trace!(%id, %name, "registered thread name");
    }

    /// Returns the name of the calling thread, without locking.
    pub fn current_thread_name(&self) -> Option<ThreadName> {
        CURRENT_NAME.with_borrow(Clone::clone)
    }

    /// Returns the name registered by the thread identified by `id`.
    pub fn find_name(&self, id: ThreadId) -> Option<ThreadName> {
        self.lock().get(&id).cloned()
    }

    /// Returns the number of named threads.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no thread was named yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<ThreadId, ThreadName>> {
        // Inserts and lookups cannot leave the map half-updated, so a poisoned lock is still usable.
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
