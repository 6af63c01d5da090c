//! Std threading abstraction layer for Threadline.
//!
//! This provides the primitives described by [`threadline_api`] on top of the threads of the std library: naming and
//! identifying threads, starting and joining them through [`ThreadHandle`], and sleeping the calling thread.

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod handle;
pub mod log;
pub mod registry;
pub mod thread;
pub mod time;

pub use handle::{Builder, ThreadHandle};
pub use registry::NameRegistry;
pub use threadline_api::{Error, Result};

/// Helper trait to convert errors into threading errors.
///
/// We cannot implement `From` as that would be part of the public API.
pub(crate) trait IntoThreadingError<E>
where
    E: core::error::Error,
{
    /// Converts the error into a threading error.
    fn into_threading_error(self) -> E;
}

impl IntoThreadingError<Error> for std::io::Error {
    fn into_threading_error(self) -> Error {
        match self.kind() {
            std::io::ErrorKind::OutOfMemory | std::io::ErrorKind::WouldBlock => {
                Error::OutOfResources
            }
            _ => Error::Unknown,
        }
    }
}
