//! Logging related system utilities.
//!
//! Diagnostic output should never fail because a thread has no name. [`display_name`] and [`current`] render the
//! registered name when there is one and fall back to [`UNNAMED`] followed by the thread id otherwise.

use core::fmt;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::thread::{Thread, ThreadAbstraction, ThreadId, ThreadName};

/// Environment variable holding the filter directives used by [`init`].
pub const LOG_ENV_VAR: &str = "THREADLINE_LOG";

/// Placeholder shown for threads without a registered name.
pub const UNNAMED: &str = "<unnamed>";

/// Renders a thread for diagnostics, see the [module documentation](self).
#[derive(Debug, Clone)]
pub struct DisplayName {
    id: ThreadId,
    name: Option<ThreadName>,
}

impl DisplayName {
    /// Returns the id of the rendered thread.
    pub fn id(&self) -> ThreadId {
        self.id
    }

    /// Returns the registered name of the rendered thread.
    pub fn name(&self) -> Option<&ThreadName> {
        self.name.as_ref()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{UNNAMED}#{}", self.id),
        }
    }
}

/// Looks up the thread identified by `id` for display.
///
/// Takes the registry lock once, do not call while holding other locks a logger may need.
pub fn display_name(id: ThreadId) -> DisplayName {
    DisplayName {
        id,
        name: Thread::find_name(id),
    }
}

/// Describes the calling thread for display, without locking.
pub fn current() -> DisplayName {
    DisplayName {
        id: Thread::current_thread_id(),
        name: Thread::current_thread_name(),
    }
}

/// An error that may happen while installing the global logger.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The filter directives in [`LOG_ENV_VAR`] could not be parsed.
    #[error("invalid log filter in `THREADLINE_LOG`")]
    Filter(#[from] tracing_subscriber::filter::FromEnvError),
    /// Another global subscriber was installed before.
    #[error("global subscriber already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a global `tracing` subscriber writing compact lines to stderr.
///
/// The filter is read from [`LOG_ENV_VAR`] and defaults to `info`. Lines include the thread name, which threads
/// started through [`ThreadHandle`](crate::ThreadHandle) share with the registry.
pub fn init() -> Result<(), InitError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env()?;

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .compact()
            .finish(),
    )?;

    Ok(())
}
