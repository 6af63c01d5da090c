//! Owned OS threads that are named before any user code runs on them.
//!
//! A [`ThreadHandle`] owns at most one thread. It is either empty, or it owns a thread that has not been waited on
//! yet. Dropping a handle that still owns a thread detaches it: the thread keeps running on its own and nothing
//! observes its end.
//!
//! # Example
//!
//! ```rust
//! use std::sync::mpsc;
//!
//! use threadline_std::ThreadHandle;
//! use threadline_std::thread::{Thread, ThreadAbstraction};
//!
//! let (sender, receiver) = mpsc::channel();
//!
//! let mut handle = ThreadHandle::new();
//! handle
//!     .start_with("worker-1", move |sender: mpsc::Sender<_>| {
//!         sender.send(Thread::current_thread_name()).unwrap();
//!     }, sender)
//!     .unwrap();
//! handle.wait();
//!
//! assert_eq!(receiver.recv().unwrap().as_deref(), Some("worker-1"));
//! ```

use std::thread::JoinHandle;

use crate::thread::{Thread, ThreadAbstraction, ThreadName};
use crate::{Error, IntoThreadingError, Result};

/// Configuration applied to the threads started by a [`ThreadHandle`].
#[derive(Debug, Clone)]
pub struct Builder {
    stack_size: Option<usize>,
    os_name: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            stack_size: None,
            os_name: true,
        }
    }
}

impl Builder {
    /// Creates the default configuration: platform stack size, OS-level thread name set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stack size in bytes of started threads.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Controls whether the registered name is also handed to the operating system.
    ///
    /// When enabled, native debuggers and profilers show the same label as [`Thread::find_name`]. Platforms may
    /// shorten the OS-level name further, the registered name is unaffected by that.
    pub fn os_name(mut self, enabled: bool) -> Self {
        self.os_name = enabled;
        self
    }

    /// Creates an empty handle that starts threads with this configuration.
    pub fn build(self) -> ThreadHandle {
        ThreadHandle {
            builder: self,
            state: State::Empty,
        }
    }

    fn to_std(&self, name: &ThreadName) -> std::thread::Builder {
        let mut builder = std::thread::Builder::new();
        // `std` rejects names with interior nul bytes.
        if self.os_name && !name.is_empty() && !name.contains('\0') {
            builder = builder.name(name.to_string());
        }
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }
        builder
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Empty,
    Running {
        join_handle: JoinHandle<()>,
        name: ThreadName,
    },
}

/// Owner of at most one started thread, see the [module documentation](self).
#[derive(Debug, Default)]
pub struct ThreadHandle {
    builder: Builder,
    state: State,
}

impl ThreadHandle {
    /// Creates an empty handle with the default [`Builder`] configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `entry` on a new thread named `name`.
    ///
    /// The name is registered from inside the new thread before `entry` runs, so `entry` already observes it through
    /// [`Thread::current_thread_name`]. `name` is copied, the caller may drop it right away.
    ///
    /// Fails with [`Error::AlreadyRunning`] if the handle still owns a thread that was not waited on. Fails with
    /// [`Error::OutOfResources`] or [`Error::Unknown`] if the operating system cannot create the thread.
    pub fn start<F>(&mut self, name: &str, entry: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        if let State::Running { name: running, .. } = &self.state {
            tracing::error!(%running, requested = name, "thread handle already owns a running thread");
            return Err(Error::AlreadyRunning);
        }

        let name = ThreadName::new_truncated(name);
        let thread_name = name.clone();

        let join_handle = self
            .builder
            .to_std(&name)
            .spawn(move || {
                Thread::register_current_thread(&thread_name);
                let _span = tracing::debug_span!("thread", name = %thread_name).entered();
                entry();
            })
            .map_err(|error| {
                tracing::error!(%name, ?error, "failed to spawn thread");
                error.into_threading_error()
            })?;

        tracing::debug!(%name, "thread started");
        self.state = State::Running { join_handle, name };
        Ok(())
    }

    /// Starts `entry(argument)` on a new thread named `name`.
    ///
    /// Behaves like [`ThreadHandle::start`], `argument` is moved to the new thread.
    pub fn start_with<F, A>(&mut self, name: &str, entry: F, argument: A) -> Result<()>
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        self.start(name, move || entry(argument))
    }

    /// Blocks until the owned thread finishes, then leaves the handle empty.
    ///
    /// Does nothing if the handle is empty. A panic of the owned thread is logged and not propagated.
    pub fn wait(&mut self) {
        let State::Running { join_handle, name } = core::mem::take(&mut self.state) else {
            return;
        };

        match join_handle.join() {
            Ok(()) => tracing::debug!(%name, "thread joined"),
            Err(_) => tracing::warn!(%name, "joined thread panicked"),
        }
    }

    /// Releases the owned thread, which keeps running unobserved, and leaves the handle empty.
    ///
    /// Does nothing if the handle is empty. Dropping a handle detaches automatically.
    pub fn detach(&mut self) {
        if let State::Running { join_handle, name } = core::mem::take(&mut self.state) {
            tracing::debug!(%name, "thread detached");
            // Dropping a `JoinHandle` detaches the thread.
            drop(join_handle);
        }
    }

    /// Returns `true` if the handle owns a thread that was not waited on yet.
    ///
    /// The thread itself may already have finished.
    pub fn is_joinable(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// Returns `true` if the handle owns a thread that has finished running.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            State::Empty => false,
            State::Running { join_handle, .. } => join_handle.is_finished(),
        }
    }

    /// Returns the name the owned thread was started with.
    pub fn name(&self) -> Option<&ThreadName> {
        match &self.state {
            State::Empty => None,
            State::Running { name, .. } => Some(name),
        }
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
