/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// An error that may happen while managing threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A thread was started on a handle that still owns a running thread.
    #[error("thread handle already owns a running thread")]
    AlreadyRunning,
    /// The operating system ran out of resources to create the thread.
    #[error("out of resources")]
    OutOfResources,
    /// Could not apply the operation due to unknown error.
    #[error("unknown error")]
    Unknown,
}
